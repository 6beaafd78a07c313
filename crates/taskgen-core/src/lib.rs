//! Pure transformation logic for taskgen.
//!
//! Everything in this crate is deterministic and free of I/O:
//!
//! - [`naming`]: category name to output file name
//! - [`ids`]: category name and position to task id
//! - [`grouping`]: stable bucketing of task records by category
//! - [`generate`]: per-category output file contents
//! - [`plan`]: the full set of files for a run, with collision reports

pub mod generate;
pub mod grouping;
pub mod ids;
pub mod naming;
pub mod plan;

pub use generate::{TITLE_ELLIPSIS, TITLE_MAX_CHARS, derive_title, generate_category_file};
pub use grouping::{CategoryGroups, group_by_category};
pub use ids::{category_prefix, generate_task_id};
pub use naming::{OUTPUT_EXTENSION, sanitize_filename, sanitize_stem};
pub use plan::{
    FilenameCollision, OutputPlan, PlannedFile, PrefixCollision, find_filename_collisions,
    find_prefix_collisions, plan_outputs,
};
