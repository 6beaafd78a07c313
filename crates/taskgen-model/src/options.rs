//! Options controlling how category files are generated.

use serde::{Deserialize, Serialize};

/// How a missing `title` is handled when generating tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TitleMode {
    /// Leave tasks without a title untouched.
    #[default]
    Preserve,
    /// Derive a title from the description when none is provided.
    DeriveWhenMissing,
}

/// What to do when two categories map to the same output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Warn and let the category written last win.
    #[default]
    Overwrite,
    /// Refuse to write anything.
    Reject,
}

/// Options for a generation run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub title_mode: TitleMode,
    pub collision_policy: CollisionPolicy,
}

impl GenerateOptions {
    /// Options used for the delimited text source: titles are never derived.
    pub fn for_csv() -> Self {
        Self {
            title_mode: TitleMode::Preserve,
            ..Default::default()
        }
    }

    /// Options used for the consolidated YAML source: missing titles are derived.
    pub fn for_yaml() -> Self {
        Self {
            title_mode: TitleMode::DeriveWhenMissing,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}
