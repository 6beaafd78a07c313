use std::collections::BTreeMap;

use tracing::debug;

use taskgen_model::{CategoryGroup, Task};

/// Tasks bucketed by category.
///
/// Categories keep first-seen order and tasks keep input order within a
/// category. Built once per run by [`group_by_category`] and read-only after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups {
    groups: Vec<CategoryGroup>,
}

impl CategoryGroups {
    pub fn get(&self, category: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|group| group.category == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryGroup> {
        self.groups.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.category.as_str())
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of tasks across all categories.
    pub fn task_count(&self) -> usize {
        self.groups.iter().map(CategoryGroup::len).sum()
    }
}

impl<'a> IntoIterator for &'a CategoryGroups {
    type Item = &'a CategoryGroup;
    type IntoIter = std::slice::Iter<'a, CategoryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for CategoryGroups {
    type Item = CategoryGroup;
    type IntoIter = std::vec::IntoIter<CategoryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group tasks by category without reordering anything.
pub fn group_by_category<I>(tasks: I) -> CategoryGroups
where
    I: IntoIterator<Item = Task>,
{
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut slots: BTreeMap<String, usize> = BTreeMap::new();
    for task in tasks {
        let slot = match slots.get(&task.category) {
            Some(slot) => *slot,
            None => {
                let slot = groups.len();
                slots.insert(task.category.clone(), slot);
                groups.push(CategoryGroup::new(task.category.clone()));
                slot
            }
        };
        groups[slot].push(task);
    }
    debug!(category_count = groups.len(), "grouped tasks by category");
    CategoryGroups { groups }
}
