//! Context search engine
//!
//! Scans the raw dump lines (not the parsed module map) for a
//! case-insensitive substring, classifies candidate module and function
//! names from the matching lines, and cuts a context window around each
//! match.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tuning knobs for a search run.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Maximum number of context blocks in the report.
    pub limit: usize,

    /// Lines of context preceding a match.
    pub context_before: usize,

    /// Lines of context following a match.
    pub context_after: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            context_before: 2,
            context_after: 6,
        }
    }
}

/// One line inside a context block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextLine {
    /// 1-based line number in the dump.
    pub number: usize,

    /// Line text, verbatim.
    pub text: String,

    /// Whether this is the exact matching line (vs. a context neighbor).
    pub is_match: bool,
}

/// A windowed excerpt around one matching line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextBlock {
    /// 1-based number of the matching line.
    pub matched_line: usize,

    /// The window, in line order.
    pub lines: Vec<ContextLine>,
}

/// Result of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// The literal query string.
    pub query: String,

    /// Total number of matching lines, before the limit is applied.
    pub total_matches: usize,

    /// Candidate module names from matching top-level lines, sorted and
    /// deduplicated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,

    /// Candidate function names from matching entry lines, sorted and
    /// deduplicated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,

    /// Up to `limit` context blocks in ascending line order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<ContextBlock>,

    /// How many matches beyond the limit were not given a block.
    pub omitted: usize,
}

/// Search the dump lines for a case-insensitive substring.
pub fn search<S: AsRef<str>>(lines: &[S], query: &str, options: &SearchOptions) -> SearchReport {
    let needle = query.to_lowercase();

    let mut matches: Vec<usize> = Vec::new();
    let mut modules: BTreeSet<String> = BTreeSet::new();
    let mut functions: BTreeSet<String> = BTreeSet::new();

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if !line.to_lowercase().contains(&needle) {
            continue;
        }
        matches.push(idx);

        let stripped = line.trim();
        if !line.is_empty() && !line.starts_with(' ') && line.contains(':') {
            if let Some((name, _)) = stripped.split_once(':') {
                modules.insert(name.to_string());
            }
        }
        if line.starts_with("    ")
            && !stripped.is_empty()
            && !stripped.ends_with(':')
            && !stripped.starts_with('(')
        {
            functions.insert(stripped.to_string());
        }
    }

    let blocks = matches
        .iter()
        .take(options.limit)
        .map(|&idx| context_block(lines, idx, options))
        .collect();

    SearchReport {
        query: query.to_string(),
        total_matches: matches.len(),
        modules: modules.into_iter().collect(),
        functions: functions.into_iter().collect(),
        blocks,
        omitted: matches.len().saturating_sub(options.limit),
    }
}

/// Cut the context window around one matching line.
fn context_block<S: AsRef<str>>(lines: &[S], idx: usize, options: &SearchOptions) -> ContextBlock {
    let start = idx.saturating_sub(options.context_before);
    let end = (idx + options.context_after + 1).min(lines.len());

    let window = (start..end)
        .map(|line_no| ContextLine {
            number: line_no + 1,
            text: lines[line_no].as_ref().to_string(),
            is_match: line_no == idx,
        })
        .collect();

    ContextBlock {
        matched_line: idx + 1,
        lines: window,
    }
}
