//! Human-readable byte sizes.
//!
//! The core of this module is [`ByteSize`], a byte count that formats itself
//! in binary ([`FileSize`]) or decimal ([`FileSizeSi`]) units. Around it sit a
//! parser for size strings and a directory size helper.

pub mod disk;
pub mod file_size;
pub mod parse;
pub mod unit;

pub use disk::calculate_dir_size;
pub use file_size::{ByteSize, DEFAULT_PRECISION, FileSize, FileSizeSi};
pub use parse::parse_size;
pub use unit::{Iec, Magnitude, Si, UnitSystem, Units};

/// Format `bytes` in the runtime-selected unit system.
///
/// This is the dispatch point used by configuration-driven callers that only
/// know the unit system at runtime.
#[must_use]
pub fn format_size(bytes: u64, units: Units, precision: usize) -> String {
    match units {
        Units::Iec => FileSize::new(bytes).formatted_size(precision),
        Units::Si => FileSizeSi::new(bytes).formatted_size(precision),
    }
}

/// Scaled value, label and magnitude of `bytes` in the runtime-selected unit system.
#[must_use]
pub fn size_parts(bytes: u64, units: Units) -> (f64, &'static str, Magnitude) {
    match units {
        Units::Iec => {
            let size = FileSize::new(bytes);
            let (value, label) = size.filesize_parts();
            (value, label, size.magnitude())
        }
        Units::Si => {
            let size = FileSizeSi::new(bytes);
            let (value, label) = size.filesize_parts();
            (value, label, size.magnitude())
        }
    }
}
