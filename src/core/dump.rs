//! Dump file loading
//!
//! The whole dump is read into memory up front and split into lines; both
//! tools operate on the same line sequence. Decoding is best-effort: bytes
//! that are not valid UTF-8 are replaced rather than rejected, so a
//! slightly mangled dump still parses.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the dump file.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The dump file does not exist at the expected path.
    #[error("Missing dump: {}", .0.display())]
    Missing(PathBuf),

    /// The dump file exists but could not be read.
    #[error("Failed to read dump {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the dump at `path` as a sequence of lines.
///
/// Fails fast when the file is missing so callers can abort before any
/// output is produced.
pub fn load_dump(path: &Path) -> Result<Vec<String>, DumpError> {
    if !path.exists() {
        return Err(DumpError::Missing(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| DumpError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    Ok(content.lines().map(str::to_string).collect())
}
