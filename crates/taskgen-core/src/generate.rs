use taskgen_model::{
    CategoryFile, CategoryGroup, GenerateOptions, GeneratedTask, Task, TaskId, TitleMode,
};

use crate::ids::category_prefix;

/// Number of description characters kept in a derived title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Marker appended to every derived title.
pub const TITLE_ELLIPSIS: &str = "...";

/// Build a title from the first [`TITLE_MAX_CHARS`] characters of a description.
///
/// The ellipsis is appended unconditionally, even for short descriptions.
pub fn derive_title(description: &str) -> String {
    let mut title: String = description.chars().take(TITLE_MAX_CHARS).collect();
    title.push_str(TITLE_ELLIPSIS);
    title
}

/// Assign ids (and titles, if requested) to every task of a group.
pub fn generate_category_file(group: &CategoryGroup, options: &GenerateOptions) -> CategoryFile {
    let prefix = category_prefix(&group.category);
    let tasks = group
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| generate_task(&prefix, idx + 1, task, options.title_mode))
        .collect();
    CategoryFile {
        category: group.category.clone(),
        tasks,
    }
}

fn generate_task(prefix: &str, index: usize, task: &Task, title_mode: TitleMode) -> GeneratedTask {
    let title = match (&task.title, title_mode) {
        (Some(title), _) => Some(title.clone()),
        (None, TitleMode::DeriveWhenMissing) => Some(derive_title(&task.description)),
        (None, TitleMode::Preserve) => None,
    };
    GeneratedTask {
        id: TaskId::from_parts(prefix, index),
        description: task.description.clone(),
        complexity: task.complexity,
        time_estimate: task.time_estimate,
        title,
    }
}
