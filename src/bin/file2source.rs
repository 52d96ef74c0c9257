use clap::{Parser, ValueEnum};
use shoebox::{embed, output, version_string};
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// One `pub const` per embedded file
    Constants,
    /// A `pub static FILES` table keyed by filename
    Map,
}

impl From<FormatArg> for embed::Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Constants => embed::Format::Constants,
            FormatArg::Map => embed::Format::Map,
        }
    }
}

#[derive(Parser)]
#[command(name = "file2source")]
#[command(about = "Embed a directory's files as Rust source")]
#[command(long_about = "\
Embed a directory's files as Rust source

Reads every immediate child file of DIRECTORY, base64-encodes the
contents, and writes OUT_FILE: a Rust source file holding the encoded
data for compiling straight into a binary. Subdirectories are ignored.

Two output variants:

  constants (default)       one constant per file
      assets/favicon.png  becomes
      pub const ASSET_FAVICONPNG: &str = \"iVBOR...\";

  map                       one table for all files
      pub static FILES: &[(&str, &str)] = &[(\"favicon.png\", \"iVBOR...\")];
      pub fn file_data(name: &str) -> Option<&'static str>

Constant names are the filename stripped to ASCII alphanumerics,
uppercased, behind --prefix. Entries are emitted in filename order, so
regenerating over unchanged input is byte-identical. Decode at runtime
with any base64 decoder.")]
#[command(version = version_string())]
struct Cli {
    /// Directory whose immediate child files are embedded
    directory: PathBuf,

    /// Generated source file to write
    out_file: PathBuf,

    /// Prefix prepended to generated constant names
    #[arg(long, default_value = "")]
    prefix: String,

    /// Output variant
    #[arg(long, value_enum, default_value_t = FormatArg::Constants)]
    format: FormatArg,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let report = embed::generate(
        &cli.directory,
        &cli.out_file,
        cli.format.into(),
        &cli.prefix,
    )?;
    output::print_embed_output(&report);

    Ok(())
}
