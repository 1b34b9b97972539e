//! Indexer operation - load, parse, render, write
//!
//! Reads the dump at its fixed path under the root, renders both index
//! documents, and overwrites the two output files. The dump existence check
//! happens before anything is written, so a failed run leaves no partial
//! output behind.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::dump::load_dump;
use crate::core::parse::parse_dump;
use crate::core::paths::{
    dump_path, index_functions_path, index_modules_path, DUMP_PATH,
};
use crate::index::functions::render_function_index;
use crate::index::modules::render_module_index;

/// Run the indexer against `root`.
///
/// Writes `index_modules.md` and `index_functions.md`, creating the output
/// directory as needed. A one-line summary goes to stderr unless `quiet`.
pub fn run_index(root: &Path, quiet: bool) -> Result<()> {
    let lines = load_dump(&dump_path(root))?;
    let modules = parse_dump(&lines);

    let modules_doc = render_module_index(&modules, DUMP_PATH);
    let functions_doc = render_function_index(&modules, DUMP_PATH);

    let modules_out = index_modules_path(root);
    let functions_out = index_functions_path(root);

    if let Some(parent) = modules_out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create index directory: {:?}", parent))?;
    }

    fs::write(&modules_out, &modules_doc)
        .with_context(|| format!("Failed to write module index: {:?}", modules_out))?;
    fs::write(&functions_out, &functions_doc)
        .with_context(|| format!("Failed to write function index: {:?}", functions_out))?;

    if !quiet {
        let function_count: usize = modules.values().map(|e| e.functions.len()).sum();
        eprintln!(
            "Indexed {} modules, {} functions from {}",
            modules.len(),
            function_count,
            DUMP_PATH
        );
    }

    Ok(())
}
