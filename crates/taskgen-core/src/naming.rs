//! Category name to file name derivation.
//!
//! File names use only lowercase ASCII letters and underscores, followed by
//! the output extension. The rules, applied in order:
//!
//! 1. lowercase the category
//! 2. replace `&` with `and`
//! 3. replace every character outside `a-z` and `_` with `_`
//! 4. collapse runs of `_` into one
//! 5. strip leading and trailing `_`

/// Extension of every generated file.
pub const OUTPUT_EXTENSION: &str = "yaml";

/// Sanitize a category into a file stem (no extension).
pub fn sanitize_stem(category: &str) -> String {
    let lowered = category.to_lowercase().replace('&', "and");
    let mut out = String::with_capacity(lowered.len());
    let mut last_underscore = false;
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() {
            out.push(ch);
            last_underscore = false;
        } else if !last_underscore {
            out.push('_');
            last_underscore = true;
        }
    }
    out.trim_matches('_').to_string()
}

/// Sanitize a category into a complete file name.
///
/// An empty (or fully stripped) category yields a name made of the extension only.
pub fn sanitize_filename(category: &str) -> String {
    format!("{}.{OUTPUT_EXTENSION}", sanitize_stem(category))
}
