//! Reads the raw word list from disk.

use std::path::Path;

use crate::error::{Error, Result};

/// Read `path` and split it into lines, in file order.
///
/// Both `\n` and `\r\n` line endings are accepted. Lines are returned
/// untouched; normalization happens in the filter stage.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs_err::read_to_string(path).map_err(|e| Error::read(e, path))?;
    let lines: Vec<String> = content.lines().map(String::from).collect();
    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
