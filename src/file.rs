// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Write one generated page, creating the parent directory if needed.
/// Returns the path written to.
pub fn write_page(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
