//! Constant-name derivation for generated source.
//!
//! Each embedded file becomes one named item in the generated source, and
//! the name is derived from the filename: every character that is not
//! ASCII alphanumeric is dropped, the remainder is uppercased, and the
//! caller's prefix is prepended verbatim.
//!
//! - `favicon.png` + prefix `ASSET_` → `ASSET_FAVICONPNG`
//! - `style-v2.css` + prefix `` → `STYLEV2CSS`
//!
//! Dropping (rather than replacing) the separators means distinct
//! filenames can collapse to the same constant — `a-b.txt` and `ab.txt`
//! both yield `ABTXT`. The embed pipeline detects that and refuses to
//! generate, since the output would not compile.

/// Derive an emitted constant identifier from a filename.
///
/// The prefix is the user's namespace and is kept as given; only the
/// filename part is sanitized and uppercased. If the combined result is
/// empty or starts with a digit, a `_` is prepended so the identifier is
/// legal Rust.
pub fn const_name(prefix: &str, filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let name = format!("{prefix}{sanitized}");
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{name}"),
        Some(_) => name,
        None => "_".to_string(),
    }
}
