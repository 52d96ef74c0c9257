//! CLI output formatting for both tools.
//!
//! Each tool has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Every entry line leads with a 3-digit positional index and the source
//! filename; what happened to it follows (`→` for a produced symbol or
//! new name, a word for everything else). A summary line closes each
//! listing.
//!
//! ```text
//! 001 favicon.png (1406 bytes) → ASSET_FAVICONPNG
//! 002 style.css (210 bytes) → ASSET_STYLECSS
//! Wrote embedded.rs: 2 files, 2156 bytes encoded
//! ```
//!
//! ```text
//! 001 IMG_1234.jpg → 20230704-123045.jpg
//! 002 IMG_5678.jpg unchanged
//! 003 IMG_9999.jpg skipped (20230704-123045.jpg exists)
//! 004 notes.txt failed: no Exif metadata found
//! 1 renamed, 1 unchanged, 1 skipped, 1 failed
//! ```

use crate::embed;
use crate::rename::{Outcome, RenameReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// file2source output
// ============================================================================

/// Format embed output: one line per embedded file, then a summary naming
/// the output file, file count, and total encoded bytes.
pub fn format_embed_output(report: &embed::Report) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, entry) in report.entries.iter().enumerate() {
        let head = format!(
            "{} {} ({} bytes)",
            format_index(i + 1),
            entry.filename,
            entry.size
        );
        match &entry.symbol {
            Some(symbol) => lines.push(format!("{head} \u{2192} {symbol}")),
            None => lines.push(head),
        }
    }

    lines.push(format!(
        "Wrote {}: {} files, {} bytes encoded",
        report.out_file.display(),
        report.entries.len(),
        report.encoded_bytes
    ));

    lines
}

/// Print embed output to stdout.
pub fn print_embed_output(report: &embed::Report) {
    for line in format_embed_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// photo-rename output
// ============================================================================

/// Format rename output: one line per directory entry with its outcome,
/// then the summary counters line.
pub fn format_rename_output(report: &RenameReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, action) in report.actions.iter().enumerate() {
        let head = format!("{} {}", format_index(i + 1), action.filename);
        let line = match &action.outcome {
            Outcome::Renamed { to } => format!("{head} \u{2192} {to}"),
            Outcome::Unchanged => format!("{head} unchanged"),
            Outcome::Skipped { existing } => format!("{head} skipped ({existing} exists)"),
            Outcome::Failed { reason } => format!("{head} failed: {reason}"),
        };
        lines.push(line);
    }

    lines.push(format!(
        "{} renamed, {} unchanged, {} skipped, {} failed",
        report.renamed(),
        report.unchanged(),
        report.skipped(),
        report.failed()
    ));

    lines
}

/// Print rename output to stdout.
pub fn print_rename_output(report: &RenameReport) {
    for line in format_rename_output(report) {
        println!("{}", line);
    }
}
