//! Persists the rendered declaration.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
///
/// The data goes to a sibling `.tmp` file first and is renamed into place,
/// so a failed run never leaves a truncated output behind.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let tmp = temp_path(path);

    if let Err(e) = fs_err::write(&tmp, contents) {
        let _ = fs_err::remove_file(&tmp);
        return Err(Error::write(e, path));
    }
    if let Err(e) = fs_err::rename(&tmp, path) {
        let _ = fs_err::remove_file(&tmp);
        return Err(Error::write(e, path));
    }

    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("output"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
