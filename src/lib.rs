//! # Shoebox
//!
//! Two small command-line utilities for working with a flat directory of
//! files — the kind of odds and ends that end up in a shoebox:
//!
//! - **`file2source`** reads every immediate child of a directory and emits
//!   a Rust source file holding the base64-encoded contents, so the data can
//!   be compiled straight into a binary and retrieved without runtime file
//!   access.
//! - **`photo-rename`** reads the capture timestamp from each photo's EXIF
//!   metadata and renames the file to a canonical `YYYYMMDD-HHMMSS` name,
//!   skipping files already named correctly or whose target name is taken.
//!
//! The tools are unrelated in purpose but identical in skeleton: list the
//! immediate children of one directory, transform each, write the result.
//! That shared skeleton lives in the library so both binaries stay thin and
//! the full pipelines are testable against temp directories without
//! spawning processes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | Flat directory listing — sorted immediate child files |
//! | [`naming`] | Filename → emitted constant identifier |
//! | [`embed`] | Source-embedding pipeline: collect, encode, render, write |
//! | [`exif`] | Capture-timestamp extraction from JPEG/TIFF metadata |
//! | [`rename`] | Photo-renaming pipeline: plan, skip, rename, report |
//! | [`output`] | CLI output formatting for both tools |
//!
//! # Design Decisions
//!
//! ## Deterministic Output
//!
//! Both pipelines process children in filename order, so a generated source
//! file is byte-identical across runs over the same input and rename runs
//! resolve collisions the same way every time. Generated files can be
//! committed and diffed.
//!
//! ## Hand-Rolled Metadata Parsing
//!
//! The [`exif`] module reads the four date/offset tags it needs with its
//! own JPEG marker scan and TIFF IFD walk — roughly a hundred lines —
//! rather than pulling in an imaging stack. The binaries stay fully
//! self-contained, and the parser only has to be as forgiving as the tags
//! it reads: anything malformed is reported per-file and skipped.
//!
//! ## Report, Don't Resolve
//!
//! The renamer never overwrites. A file whose target name is taken is
//! reported and left alone; deciding between two photos shot in the same
//! second is the photographer's call, not the tool's.

pub mod embed;
pub mod exif;
pub mod naming;
pub mod output;
pub mod rename;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Build version string: the crate version on a release tag, `dev@<hash>`
/// between tags. Computed by `build.rs` from git state.
pub fn version_string() -> &'static str {
    env!("BUILD_VERSION")
}
