//! Configuration for the library's configurable helpers.
//!
//! [`FileConfig`] is what the TOML file contains; [`SizeOptions`] is the
//! resolved formatting choice after layering CLI values over it.

pub mod file;

pub use file::FileConfig;

use crate::size::{DEFAULT_PRECISION, Units, format_size};

/// Resolved size formatting options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeOptions {
    /// Unit system used for display
    pub units: Units,

    /// Digits after the decimal point for non-byte values
    pub precision: usize,
}

impl Default for SizeOptions {
    fn default() -> Self {
        Self {
            units: Units::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SizeOptions {
    /// Layer explicit values over the config file over the defaults.
    #[must_use]
    pub fn resolve(units: Option<Units>, precision: Option<usize>, config: &FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            units: units.or(config.size.units).unwrap_or(defaults.units),
            precision: precision
                .or(config.size.precision)
                .unwrap_or(defaults.precision),
        }
    }

    /// Format `bytes` with these options.
    #[must_use]
    pub fn format(&self, bytes: u64) -> String {
        format_size(bytes, self.units, self.precision)
    }
}
