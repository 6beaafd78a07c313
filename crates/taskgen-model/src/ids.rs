#![deny(unsafe_code)]

use std::fmt;

/// A generated task identifier, e.g. `DA-001`.
///
/// Rendered as `<PREFIX>-<index>` where the index is zero-padded to three digits.
/// Indices above 999 keep their full width.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn from_parts(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}-{index:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix portion (everything before the last `-`).
    pub fn prefix(&self) -> &str {
        self.0
            .rsplit_once('-')
            .map(|(prefix, _)| prefix)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for TaskId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_three_digits() {
        assert_eq!(TaskId::from_parts("DA", 1).as_str(), "DA-001");
        assert_eq!(TaskId::from_parts("DA", 42).as_str(), "DA-042");
    }

    #[test]
    fn wide_indices_are_not_truncated() {
        assert_eq!(TaskId::from_parts("O", 1000).as_str(), "O-1000");
        assert_eq!(TaskId::from_parts("O", 12345).as_str(), "O-12345");
    }

    #[test]
    fn prefix_handles_empty_prefix() {
        assert_eq!(TaskId::from_parts("", 7).prefix(), "");
        assert_eq!(TaskId::from_parts("QA", 7).prefix(), "QA");
    }
}
