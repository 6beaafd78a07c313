//! taskgen output generation.
//!
//! - **Category files**: one YAML document per category, named by the sanitized category
//! - **State files**: the completed-task list consumed by the task viewer

mod error;
mod state;
mod yaml;

pub use error::{OutputError, Result};
pub use state::clear_completed_tasks;
pub use yaml::{WrittenFile, render_category_yaml, write_category_file, write_output_plan};
