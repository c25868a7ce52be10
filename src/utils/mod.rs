//! Utility functions and helpers.
//!
//! This module contains the pure helpers of the crate: string comparison and
//! containment, sort comparators, random integers, and python-style
//! `sorted`/`range`.

pub mod builtins;
pub mod random;
pub mod sort;
pub mod strings;

pub use builtins::{range, range_step, sorted};
pub use random::{irand, urand};
pub use strings::{compare, contains, contains_any, contains_in_range, is_any_of, same};
