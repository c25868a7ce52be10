//! Thin wrappers over POSIX system interfaces.
//!
//! Permission and ownership changes, shell-style name matching, and
//! passwd/group database lookups.

pub mod chmod;
pub mod chown;
pub mod fnmatch;
pub mod group;
pub mod passwd;

pub use chmod::{chmod, fchmod};
pub use chown::{chown, fchown};
pub use fnmatch::fnmatch;
pub use group::Group;
pub use passwd::Passwd;
