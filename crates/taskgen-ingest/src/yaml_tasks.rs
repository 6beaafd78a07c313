//! Consolidated YAML task source: a top-level sequence of task mappings.

use std::fs;
use std::path::Path;

use tracing::info;

use taskgen_model::Task;

use crate::error::{IngestError, Result};

/// Read every task from a YAML file on disk.
pub fn read_task_yaml(path: &Path) -> Result<Vec<Task>> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let tasks = parse_task_yaml(&contents, path)?;
    info!(source = %path.display(), task_count = tasks.len(), "read task yaml");
    Ok(tasks)
}

/// Parse a YAML document into tasks; `source` is used for error messages only.
///
/// An empty document yields no tasks. Unknown keys on a record are ignored.
pub fn parse_task_yaml(contents: &str, source: &Path) -> Result<Vec<Task>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(contents).map_err(|e| IngestError::Yaml {
        path: source.to_path_buf(),
        source: e,
    })
}
