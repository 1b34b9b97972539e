//! apidex-index - generate Markdown indexes from the API dump

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use apidex::index::generate::run_index;

/// Generate compact API indexes from the TXT dump.
#[derive(Parser, Debug)]
#[command(name = "apidex-index")]
#[command(
    author,
    version,
    about,
    long_about = r#"Parse the API dump and write two Markdown artifacts:

- a per-module summary (docs/api/index/index_modules.md)
- a flat function list (docs/api/index/index_functions.md)

Both outputs are overwritten on every run and are byte-identical for a
byte-identical dump.

Examples:
    apidex-index
    apidex-index --root /path/to/workspace
"#
)]
struct Cli {
    /// Root directory containing the dump and index outputs.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for the run (defaults to the current directory).\n\n\
The dump is expected at <ROOT>/docs/api/raw/api_dump.txt and both index\n\
files are written under <ROOT>/docs/api/index/."
    )]
    root: PathBuf,

    /// Quiet mode (suppress the summary line).
    #[arg(
        short,
        long,
        long_help = "Suppress the one-line summary written to stderr after the indexes\n\
are written."
    )]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_index(&cli.root, cli.quiet)
}
