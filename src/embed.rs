//! Source-embedding pipeline: collect → encode → render → write.
//!
//! Reads every immediate child file of a directory, base64-encodes the
//! contents, and emits a Rust source file holding the encoded data for
//! in-binary retrieval. Two output variants:
//!
//! - **Constants**: one `pub const` string per file, named from the
//!   filename via [`naming::const_name`].
//! - **Map**: a single `pub static FILES` table of `(filename, base64)`
//!   entries plus a `file_data` lookup function.
//!
//! The generated file starts with a header comment and an inventory of
//! what was embedded. Entries appear in filename order, so regenerating
//! over the same input is byte-identical and the output diffs cleanly
//! under version control.

use crate::naming;
use crate::walk::{self, WalkError};
use base64::{Engine as _, engine::general_purpose};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Walk(#[from] WalkError),
    #[error("files {first} and {second} both map to constant {name}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },
}

/// The two output variants of the generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One `pub const NAME: &str` per embedded file.
    Constants,
    /// A `pub static FILES` table keyed by source filename.
    Map,
}

/// One collected child file, contents in memory.
#[derive(Debug)]
pub struct EmbeddedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Inventory line for one embedded file.
#[derive(Debug, Clone)]
pub struct Entry {
    pub filename: String,
    /// Raw (pre-encoding) size in bytes.
    pub size: usize,
    /// Emitted constant name; `None` in map output.
    pub symbol: Option<String>,
}

/// A rendered source file plus its inventory.
#[derive(Debug)]
pub struct Rendered {
    pub source: String,
    pub entries: Vec<Entry>,
    /// Total base64 text length across all entries.
    pub encoded_bytes: usize,
}

/// What a generation run produced, for CLI display.
#[derive(Debug)]
pub struct Report {
    pub out_file: PathBuf,
    pub entries: Vec<Entry>,
    pub encoded_bytes: usize,
}

/// Read every immediate child file of `dir` into memory, in filename order.
pub fn collect(dir: &Path) -> Result<Vec<EmbeddedFile>, EmbedError> {
    let mut files = Vec::new();
    for path in walk::list_files(dir)? {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = fs::read(&path)?;
        files.push(EmbeddedFile { filename, bytes });
    }
    Ok(files)
}

/// Render the full text of the generated source file.
///
/// `prefix` only affects the `Constants` variant. Fails with
/// [`EmbedError::DuplicateName`] if two filenames sanitize to the same
/// constant, since the emitted source would not compile.
pub fn render(files: &[EmbeddedFile], format: Format, prefix: &str) -> Result<Rendered, EmbedError> {
    let entries = inventory(files, format, prefix)?;
    let encoded: Vec<String> = files
        .iter()
        .map(|f| general_purpose::STANDARD.encode(&f.bytes))
        .collect();
    let encoded_bytes = encoded.iter().map(String::len).sum();

    let mut out = String::new();
    out.push_str("// Generated by file2source. Do not edit.\n//\n");
    match format {
        Format::Constants => {
            out.push_str("// Embedded files (name, size, constant):\n");
            for entry in &entries {
                let symbol = entry.symbol.as_deref().unwrap_or_default();
                out.push_str(&format!(
                    "//   {}  {} bytes  {}\n",
                    entry.filename, entry.size, symbol
                ));
            }
            out.push('\n');
            for (entry, data) in entries.iter().zip(&encoded) {
                let symbol = entry.symbol.as_deref().unwrap_or_default();
                out.push_str(&format!("pub const {symbol}: &str = \"{data}\";\n"));
            }
        }
        Format::Map => {
            out.push_str("// Embedded files (name, size):\n");
            for entry in &entries {
                out.push_str(&format!("//   {}  {} bytes\n", entry.filename, entry.size));
            }
            out.push('\n');
            out.push_str("/// Base64-encoded file contents, keyed by source filename.\n");
            out.push_str("pub static FILES: &[(&str, &str)] = &[\n");
            for (entry, data) in entries.iter().zip(&encoded) {
                let key: String = entry.filename.chars().map(escape_char).collect();
                out.push_str(&format!("    (\"{key}\", \"{data}\"),\n"));
            }
            out.push_str("];\n\n");
            out.push_str("/// Look up an embedded file's base64 data by source filename.\n");
            out.push_str("pub fn file_data(name: &str) -> Option<&'static str> {\n");
            out.push_str("    FILES.iter().find(|(n, _)| *n == name).map(|(_, data)| *data)\n");
            out.push_str("}\n");
        }
    }

    Ok(Rendered {
        source: out,
        entries,
        encoded_bytes,
    })
}

/// Full pipeline: collect `dir`'s children, render, write `out_file`.
pub fn generate(
    dir: &Path,
    out_file: &Path,
    format: Format,
    prefix: &str,
) -> Result<Report, EmbedError> {
    let files = collect(dir)?;
    let rendered = render(&files, format, prefix)?;
    fs::write(out_file, &rendered.source)?;
    Ok(Report {
        out_file: out_file.to_path_buf(),
        entries: rendered.entries,
        encoded_bytes: rendered.encoded_bytes,
    })
}

/// Build the inventory, deriving constant names and rejecting collisions.
fn inventory(files: &[EmbeddedFile], format: Format, prefix: &str) -> Result<Vec<Entry>, EmbedError> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut entries = Vec::with_capacity(files.len());

    for file in files {
        let symbol = match format {
            Format::Constants => {
                let name = naming::const_name(prefix, &file.filename);
                if let Some(first) = seen.insert(name.clone(), file.filename.clone()) {
                    return Err(EmbedError::DuplicateName {
                        name,
                        first,
                        second: file.filename.clone(),
                    });
                }
                Some(name)
            }
            Format::Map => None,
        };
        entries.push(Entry {
            filename: file.filename.clone(),
            size: file.bytes.len(),
            symbol,
        });
    }
    Ok(entries)
}

/// Escape one filename character for use inside a `"`-delimited literal.
fn escape_char(c: char) -> String {
    match c {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        c => c.to_string(),
    }
}
