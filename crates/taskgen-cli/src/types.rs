use std::path::PathBuf;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub categories: Vec<CategorySummary>,
    pub skipped_rows: usize,
    pub filename_collisions: usize,
    pub prefix_collisions: usize,
    pub dry_run: bool,
}

impl RunResult {
    pub fn task_count(&self) -> usize {
        self.categories.iter().map(|summary| summary.task_count).sum()
    }
}

#[derive(Debug)]
pub struct CategorySummary {
    pub category: String,
    pub file_name: String,
    pub task_count: usize,
    pub first_id: Option<String>,
    pub last_id: Option<String>,
    /// `None` on dry runs.
    pub written: Option<PathBuf>,
}
