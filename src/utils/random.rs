//! Random integers in an inclusive range.
//!
//! Both helpers draw from the thread-local generator, which is seeded from
//! operating system entropy.

use rand::Rng;

/// A uniformly distributed `u64` in `min..=max`.
///
/// Swapped bounds are accepted and treated as `max..=min`.
#[must_use]
pub fn urand(min: u64, max: u64) -> u64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}

/// A uniformly distributed `i64` in `min..=max`.
///
/// Swapped bounds are accepted and treated as `max..=min`.
#[must_use]
pub fn irand(min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}
