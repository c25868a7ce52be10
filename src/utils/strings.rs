//! String comparison and containment helpers.

use std::cmp::Ordering;

/// Three-way comparison of two strings: `-1`, `0` or `1`.
#[must_use]
pub fn compare(a: &str, b: &str) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Whether `haystack` contains `needle`.
#[must_use]
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Whether `needle` occurs within the byte range `start..end` of `haystack`.
///
/// `end` is an exclusive byte offset, not a length: this is a slice range,
/// not a `substr(start, count)` window. Returns `false` when `start >= end`.
/// `end` is clamped to the haystack length; a range that does not fall on
/// character boundaries never matches.
#[must_use]
pub fn contains_in_range(haystack: &str, needle: &str, start: usize, end: usize) -> bool {
    if start >= end {
        return false;
    }

    let end = end.min(haystack.len());
    haystack
        .get(start..end)
        .is_some_and(|window| window.contains(needle))
}

/// Whether `haystack` contains any of `needles`.
#[must_use]
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles
        .iter()
        .any(|needle| haystack.contains(needle.as_ref()))
}

/// Whether `value` is exactly equal to one of `candidates`.
#[must_use]
pub fn is_any_of<S: AsRef<str>>(candidates: &[S], value: &str) -> bool {
    candidates.iter().any(|candidate| candidate.as_ref() == value)
}

/// Whether two strings are identical.
#[must_use]
pub fn same(a: &str, b: &str) -> bool {
    a == b
}

#[must_use]
pub fn prefix(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

#[must_use]
pub fn suffix(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

#[must_use]
pub fn ltrim(s: &str) -> &str {
    s.trim_start()
}

#[must_use]
pub fn rtrim(s: &str) -> &str {
    s.trim_end()
}

#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim()
}
