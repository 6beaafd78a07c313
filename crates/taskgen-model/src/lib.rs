pub mod ids;
pub mod options;
pub mod task;

pub use ids::TaskId;
pub use options::{CollisionPolicy, GenerateOptions, TitleMode};
pub use task::{CategoryFile, CategoryGroup, GeneratedTask, Task};
