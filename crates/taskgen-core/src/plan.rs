//! The set of files a run will produce.
//!
//! Planning is separate from writing so collisions can be reported (or
//! rejected) before anything touches the disk.

use std::collections::BTreeMap;

use tracing::debug;

use taskgen_model::{CategoryFile, GenerateOptions};

use crate::generate::generate_category_file;
use crate::grouping::CategoryGroups;
use crate::ids::category_prefix;
use crate::naming::sanitize_filename;

/// One output file, named and filled but not yet written.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFile {
    pub file_name: String,
    pub file: CategoryFile,
}

/// Two or more categories that sanitize to the same file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameCollision {
    pub file_name: String,
    /// Colliding categories in write order; the last one wins on overwrite.
    pub categories: Vec<String>,
}

/// Two or more categories sharing an id prefix, so their ids repeat across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixCollision {
    pub prefix: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPlan {
    /// Files in category first-seen order.
    pub files: Vec<PlannedFile>,
    pub filename_collisions: Vec<FilenameCollision>,
    pub prefix_collisions: Vec<PrefixCollision>,
}

impl OutputPlan {
    pub fn task_count(&self) -> usize {
        self.files.iter().map(|planned| planned.file.tasks.len()).sum()
    }

    pub fn has_filename_collisions(&self) -> bool {
        !self.filename_collisions.is_empty()
    }
}

/// Name and fill one file per category.
pub fn plan_outputs(groups: &CategoryGroups, options: &GenerateOptions) -> OutputPlan {
    let files: Vec<PlannedFile> = groups
        .iter()
        .map(|group| {
            let file_name = sanitize_filename(&group.category);
            debug!(
                category = %group.category,
                file_name = %file_name,
                task_count = group.len(),
                "planned category file"
            );
            PlannedFile {
                file_name,
                file: generate_category_file(group, options),
            }
        })
        .collect();
    OutputPlan {
        files,
        filename_collisions: find_filename_collisions(groups),
        prefix_collisions: find_prefix_collisions(groups),
    }
}

/// Categories whose sanitized file names coincide.
pub fn find_filename_collisions(groups: &CategoryGroups) -> Vec<FilenameCollision> {
    collect_shared(groups, sanitize_filename)
        .into_iter()
        .map(|(file_name, categories)| FilenameCollision {
            file_name,
            categories,
        })
        .collect()
}

/// Distinct categories whose id prefixes coincide.
pub fn find_prefix_collisions(groups: &CategoryGroups) -> Vec<PrefixCollision> {
    collect_shared(groups, category_prefix)
        .into_iter()
        .map(|(prefix, categories)| PrefixCollision { prefix, categories })
        .collect()
}

fn collect_shared(
    groups: &CategoryGroups,
    key: impl Fn(&str) -> String,
) -> Vec<(String, Vec<String>)> {
    let mut by_key: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for category in groups.categories() {
        by_key
            .entry(key(category))
            .or_default()
            .push(category.to_string());
    }
    by_key
        .into_iter()
        .filter(|(_, categories)| categories.len() > 1)
        .collect()
}
