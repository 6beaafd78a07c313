//! Task state files kept next to the generated category files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{OutputError, Result};

/// Reset the completed-task state file to an empty JSON array.
///
/// The parent directory is created when missing; existing contents are discarded.
pub fn clear_completed_tasks(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::create_dir(parent, e))?;
    }
    let completed: Vec<String> = Vec::new();
    let contents = serde_json::to_string_pretty(&completed).map_err(|e| OutputError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, contents).map_err(|e| OutputError::write(path, e))?;
    info!(path = %path.display(), "cleared completed tasks");
    Ok(())
}
