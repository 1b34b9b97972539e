//! apidex-lookup - search the API dump with context

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use apidex::search::engine::SearchOptions;
use apidex::search::render::{run_search, ReportFormat};

/// Search the API dump with context.
#[derive(Parser, Debug)]
#[command(name = "apidex-lookup")]
#[command(
    author,
    version,
    about,
    long_about = r#"Scan the API dump for a case-insensitive substring and report matching
modules, matching functions, and a windowed context excerpt per match.

Examples:
    apidex-lookup getPosition
    apidex-lookup "vehicle" --limit 5 --context-after 2
    apidex-lookup spawn --format json
"#
)]
struct Cli {
    /// Substring to search for.
    #[arg(value_name = "QUERY")]
    query: String,

    /// Maximum number of matches to show.
    #[arg(long, default_value = "20", value_name = "N")]
    limit: usize,

    /// Lines of context before a match.
    #[arg(long, default_value = "2", value_name = "N")]
    context_before: usize,

    /// Lines of context after a match.
    #[arg(long, default_value = "6", value_name = "N")]
    context_after: usize,

    /// Output format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for the search report.\n\n\
Supported values:\n\
- text (default): the line-oriented report\n\
- json: a single JSON object"
    )]
    format: String,

    /// Root directory containing the dump.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for the run (defaults to the current directory).\n\n\
The dump is expected at <ROOT>/docs/api/raw/api_dump.txt."
    )]
    root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format: ReportFormat = cli.format.parse().unwrap_or_default();
    let options = SearchOptions {
        limit: cli.limit,
        context_before: cli.context_before,
        context_after: cli.context_after,
    };

    run_search(&cli.root, &cli.query, &options, format)
}
