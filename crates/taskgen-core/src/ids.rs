use taskgen_model::TaskId;

/// Initials of every ASCII alphanumeric run in `category`, uppercased.
///
/// `"Data & Analytics"` gives `"DA"`, `"web3 ops"` gives `"WO"`.
pub fn category_prefix(category: &str) -> String {
    category
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter_map(|token| token.chars().next())
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Derive the id of the `index`-th task (1-based) in `category`.
pub fn generate_task_id(category: &str, index: usize) -> TaskId {
    TaskId::from_parts(&category_prefix(category), index)
}
