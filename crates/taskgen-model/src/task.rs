#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::TaskId;

/// A single task record as read from a source file.
///
/// Identity is positional: two records with equal fields are still distinct tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub category: String,
    pub description: String,
    pub complexity: i64,
    pub time_estimate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Task {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        complexity: i64,
        time_estimate: f64,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            complexity,
            time_estimate,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Tasks sharing one category, in the order they were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub tasks: Vec<Task>,
}

impl CategoryGroup {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            tasks: Vec::new(),
        }
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A task with its derived identifier. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTask {
    pub id: TaskId,
    pub description: String,
    pub complexity: i64,
    pub time_estimate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The contents of one per-category output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFile {
    pub category: String,
    pub tasks: Vec<GeneratedTask>,
}

impl CategoryFile {
    pub fn first_id(&self) -> Option<&TaskId> {
        self.tasks.first().map(|task| &task.id)
    }

    pub fn last_id(&self) -> Option<&TaskId> {
        self.tasks.last().map(|task| &task.id)
    }
}
