//! Comparators for sorting strings and paths.

use std::path::Path;

use super::strings;

/// Compare two strings for sorting, returning a negative, zero or positive value.
#[must_use]
pub fn compare(a: &str, b: &str) -> i64 {
    i64::from(strings::compare(a, b))
}

/// Compare two paths by their (lossy) string form.
#[must_use]
pub fn compare_paths(a: &Path, b: &Path) -> i64 {
    compare(&a.to_string_lossy(), &b.to_string_lossy())
}
