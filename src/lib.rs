//! # leafutils
//!
//! Small, independent utility helpers. Each module is a leaf: nothing in it
//! coordinates the others.
//!
//! - [`size`]: human-readable byte sizes in binary (IEC) or decimal (SI) units,
//!   size string parsing and directory size measurement
//! - [`utils`]: string comparison and containment, sort comparators, random
//!   integers, `sorted`/`range`
//! - [`sys`]: `chmod`/`chown` wrappers, `fnmatch`, passwd and group lookups
//! - [`shell`]: run a shell command and capture its output
//! - [`config`] and [`output`]: configuration file and JSON structures used by
//!   the `leafutils` binary
//!
//! ```
//! use leafutils::size::{FileSize, FileSizeSi};
//!
//! let size = FileSize::new(942_819);
//! assert_eq!(size.to_string(), "920.7 KiB");
//! assert!(size.is_kibibyte());
//! assert_eq!(FileSizeSi::new(942_819).to_string(), "942.8 KB");
//! ```

pub mod config;
pub mod output;
pub mod shell;
pub mod size;
pub mod sys;
pub mod utils;

pub use config::{FileConfig, SizeOptions};
pub use size::{ByteSize, FileSize, FileSizeSi, Magnitude, Units};
