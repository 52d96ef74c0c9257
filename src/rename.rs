//! Photo-renaming pipeline: list → extract timestamp → skip or rename.
//!
//! Every immediate child file of the directory gets exactly one outcome:
//!
//! - **Renamed** to `<compact timestamp>.<original extension>`
//! - **Unchanged** — already bears its target name
//! - **Skipped** — the target name is taken, on disk or by an earlier
//!   rename in this run; the file is reported and left alone
//! - **Failed** — no usable metadata (not a photo, no Exif, bad
//!   timestamp) or the rename itself failed
//!
//! Per-file problems never abort the run; only an unreadable directory
//! does. A run never overwrites an existing file, and `dry_run` reports
//! the exact plan — including collisions between files renamed within
//! the same run — without touching the filesystem.

use crate::exif::{self, CaptureTime};
use crate::walk::{self, WalkError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// What happened to one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Renamed { to: String },
    Unchanged,
    Skipped { existing: String },
    Failed { reason: String },
}

/// One directory entry and its outcome, in processing order.
#[derive(Debug)]
pub struct FileAction {
    pub filename: String,
    pub outcome: Outcome,
}

/// All actions from one run, with summary counters.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub actions: Vec<FileAction>,
}

impl RenameReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Renamed { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.actions.iter().filter(|a| pred(&a.outcome)).count()
    }
}

/// Rename every photo in `dir` to its timestamp-derived name.
///
/// With `dry_run` set, nothing on disk changes; the report is the plan a
/// real run would execute.
pub fn rename_photos(dir: &Path, dry_run: bool) -> Result<RenameReport, WalkError> {
    let mut report = RenameReport::default();
    // Names taken by renames earlier in this run. fs::rename makes them
    // visible on disk anyway; the set is what keeps dry-run honest.
    let mut claimed: HashSet<String> = HashSet::new();

    for path in walk::list_files(dir)? {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let capture = match exif::read_capture_time(&path) {
            Ok(capture) => capture,
            Err(e) => {
                report.actions.push(FileAction {
                    filename,
                    outcome: Outcome::Failed {
                        reason: e.to_string(),
                    },
                });
                continue;
            }
        };

        let target = target_name(&capture, &path);
        if filename == target {
            report.actions.push(FileAction {
                filename,
                outcome: Outcome::Unchanged,
            });
            continue;
        }

        let target_path = dir.join(&target);
        if target_path.exists() || claimed.contains(&target) {
            report.actions.push(FileAction {
                filename,
                outcome: Outcome::Skipped { existing: target },
            });
            continue;
        }

        if !dry_run
            && let Err(e) = fs::rename(&path, &target_path)
        {
            report.actions.push(FileAction {
                filename,
                outcome: Outcome::Failed {
                    reason: format!("rename failed: {e}"),
                },
            });
            continue;
        }

        claimed.insert(target.clone());
        report.actions.push(FileAction {
            filename,
            outcome: Outcome::Renamed { to: target },
        });
    }

    Ok(report)
}

/// Target filename: compact timestamp stem plus the source extension,
/// carried over verbatim (case included).
fn target_name(capture: &CaptureTime, path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{ext}", capture.compact()),
        None => capture.compact(),
    }
}
