//! Python-style `sorted` and `range` helpers.

use anyhow::{Result, bail};

/// Collect `items` into a sorted `Vec`, descending when `reverse` is set.
#[must_use]
pub fn sorted<T: Ord, I: IntoIterator<Item = T>>(items: I, reverse: bool) -> Vec<T> {
    let mut items: Vec<T> = items.into_iter().collect();
    items.sort();
    if reverse {
        items.reverse();
    }
    items
}

/// The integers `0..end`. Empty when `end <= 0`.
#[must_use]
pub fn range(end: i64) -> Vec<i64> {
    (0..end.max(0)).collect()
}

/// The integers from `start` towards `end` (exclusive) in increments of `step`.
///
/// A negative `step` counts down. An empty vector is returned when `end`
/// lies on the wrong side of `start`.
///
/// # Errors
///
/// Returns an error if `step` is zero.
pub fn range_step(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        bail!("range step must not be zero");
    }

    let mut values = Vec::new();
    let mut current = start;
    while (step > 0 && current < end) || (step < 0 && current > end) {
        values.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(values)
}
