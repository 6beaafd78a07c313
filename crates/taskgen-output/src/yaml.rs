//! Per-category YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use taskgen_core::{OutputPlan, sanitize_filename};
use taskgen_model::{CollisionPolicy, GeneratedTask};

use crate::error::{OutputError, Result};

/// A file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub category: String,
    pub path: PathBuf,
    pub task_count: usize,
}

#[derive(Serialize)]
struct CategoryDocument<'a> {
    category: &'a str,
    tasks: &'a [GeneratedTask],
}

/// Render the YAML document for one category.
pub fn render_category_yaml(category: &str, tasks: &[GeneratedTask]) -> Result<String> {
    serde_yaml::to_string(&CategoryDocument { category, tasks }).map_err(|e| OutputError::Yaml {
        category: category.to_string(),
        source: e,
    })
}

/// Write one category file into `destination_dir`, creating the directory if needed.
///
/// The file is named after the sanitized category and always overwritten.
pub fn write_category_file(
    category: &str,
    tasks: &[GeneratedTask],
    destination_dir: &Path,
) -> Result<PathBuf> {
    write_named(&sanitize_filename(category), category, tasks, destination_dir)
}

fn write_named(
    file_name: &str,
    category: &str,
    tasks: &[GeneratedTask],
    destination_dir: &Path,
) -> Result<PathBuf> {
    let contents = render_category_yaml(category, tasks)?;
    fs::create_dir_all(destination_dir)
        .map_err(|e| OutputError::create_dir(destination_dir, e))?;
    let path = destination_dir.join(file_name);
    fs::write(&path, contents).map_err(|e| OutputError::write(&path, e))?;
    debug!(
        category = %category,
        path = %path.display(),
        task_count = tasks.len(),
        "wrote category file"
    );
    Ok(path)
}

/// Write every planned file, in plan order.
///
/// Filename collisions are checked first: with [`CollisionPolicy::Reject`]
/// nothing is written; with [`CollisionPolicy::Overwrite`] each collision is
/// logged and the category written last keeps the file.
pub fn write_output_plan(
    plan: &OutputPlan,
    destination_dir: &Path,
    policy: CollisionPolicy,
) -> Result<Vec<WrittenFile>> {
    for collision in &plan.filename_collisions {
        let categories = collision
            .categories
            .iter()
            .map(|category| format!("'{category}'"))
            .collect::<Vec<_>>()
            .join(", ");
        match policy {
            CollisionPolicy::Reject => {
                return Err(OutputError::FilenameCollision {
                    file_name: collision.file_name.clone(),
                    categories,
                });
            }
            CollisionPolicy::Overwrite => {
                warn!(
                    file_name = %collision.file_name,
                    categories = %categories,
                    "categories share an output file; last one wins"
                );
            }
        }
    }

    let mut written = Vec::with_capacity(plan.files.len());
    for planned in &plan.files {
        let path = write_named(
            &planned.file_name,
            &planned.file.category,
            &planned.file.tasks,
            destination_dir,
        )?;
        written.push(WrittenFile {
            category: planned.file.category.clone(),
            path,
            task_count: planned.file.tasks.len(),
        });
    }
    Ok(written)
}
