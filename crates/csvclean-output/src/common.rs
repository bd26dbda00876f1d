//! Shared helpers for the writers.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
        debug!(path = %parent.display(), "created output directory");
    }
    Ok(())
}
