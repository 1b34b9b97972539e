//! Fixed dump and index paths
//!
//! Both tools operate on well-known relative paths resolved against a root
//! directory (defaults to the current directory in the CLIs).

use std::path::{Path, PathBuf};

/// Relative path of the raw API dump.
pub const DUMP_PATH: &str = "docs/api/raw/api_dump.txt";

/// Relative path of the generated module summary.
pub const INDEX_MODULES_PATH: &str = "docs/api/index/index_modules.md";

/// Relative path of the generated function list.
pub const INDEX_FUNCTIONS_PATH: &str = "docs/api/index/index_functions.md";

/// Resolve the dump path under `root`.
pub fn dump_path(root: &Path) -> PathBuf {
    root.join(DUMP_PATH)
}

/// Resolve the module summary output path under `root`.
pub fn index_modules_path(root: &Path) -> PathBuf {
    root.join(INDEX_MODULES_PATH)
}

/// Resolve the function list output path under `root`.
pub fn index_functions_path(root: &Path) -> PathBuf {
    root.join(INDEX_FUNCTIONS_PATH)
}
