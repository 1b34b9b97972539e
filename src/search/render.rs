//! Search report rendering
//!
//! Renders a SearchReport as plain text (the default, line-oriented report)
//! or as a single JSON object.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use crate::core::dump::load_dump;
use crate::core::paths::dump_path;
use crate::search::engine::{search, SearchOptions, SearchReport};

/// Output format for the search report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render the report as plain text.
///
/// A zero-match report is exactly the query echo and the count; otherwise
/// the candidate sections, context blocks, and the omitted-matches note
/// follow. The exact matching line in each block carries a `>` marker.
pub fn render_text(report: &SearchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Query: {}", report.query);
    let _ = writeln!(out, "Total matches: {}", report.total_matches);

    if report.total_matches == 0 {
        return out;
    }
    out.push('\n');

    if !report.modules.is_empty() {
        out.push_str("Matching modules/tables:\n");
        for name in &report.modules {
            let _ = writeln!(out, "- {name}");
        }
        out.push('\n');
    }

    if !report.functions.is_empty() {
        out.push_str("Matching functions:\n");
        for name in &report.functions {
            let _ = writeln!(out, "- {name}");
        }
        out.push('\n');
    }

    out.push_str("Context matches:\n");
    for block in &report.blocks {
        out.push_str("-\n");
        for line in &block.lines {
            let marker = if line.is_match { '>' } else { ' ' };
            let _ = writeln!(out, "{} {:>6}: {}", marker, line.number, line.text);
        }
    }

    if report.omitted > 0 {
        out.push('\n');
        let _ = writeln!(
            out,
            "... {} more matches not shown (refine search).",
            report.omitted
        );
    }

    out
}

/// Render the report as a single pretty-printed JSON object.
pub fn render_json(report: &SearchReport) -> String {
    let mut out = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

/// Run a search against the dump under `root` and print the report.
pub fn run_search(
    root: &Path,
    query: &str,
    options: &SearchOptions,
    format: ReportFormat,
) -> Result<()> {
    let lines = load_dump(&dump_path(root))?;
    let report = search(&lines, query, options);

    match format {
        ReportFormat::Text => print!("{}", render_text(&report)),
        ReportFormat::Json => print!("{}", render_json(&report)),
    }

    Ok(())
}
