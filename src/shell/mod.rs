//! Subprocess execution.

pub mod execute;

pub use execute::{DEFAULT_SHELL, Execute};
