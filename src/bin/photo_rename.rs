use clap::Parser;
use shoebox::{output, rename, version_string};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-rename")]
#[command(about = "Rename photos to their capture timestamp")]
#[command(long_about = "\
Rename photos to their capture timestamp

Reads the Exif capture timestamp (DateTimeOriginal, falling back to
DateTime) from every immediate child of DIRECTORY and renames each file
to YYYYMMDD-HHMMSS plus its original extension:

  IMG_1234.jpg  becomes  20230704-123045.jpg
  R0019876.JPG  becomes  20230704-123211+0200.JPG   (offset tag present)

Files already named correctly are left alone, and a file whose target
name is taken is reported and skipped; nothing is ever overwritten.
Files without usable metadata (sidecars, non-photos) are reported and
skipped as well. Subdirectories are ignored.")]
#[command(version = version_string())]
struct Cli {
    /// Directory of photos to rename
    directory: PathBuf,

    /// Report what would be renamed without touching any file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let report = rename::rename_photos(&cli.directory, cli.dry_run)?;
    output::print_rename_output(&report);
    if cli.dry_run {
        println!("Dry run: no files were changed");
    }

    Ok(())
}
