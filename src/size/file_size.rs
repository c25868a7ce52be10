//! Byte counts with human-readable formatting.
//!
//! [`ByteSize`] wraps a raw `u64` byte count and classifies it into the largest
//! [`Magnitude`] whose threshold it reaches. The same logic serves both unit
//! systems; [`FileSize`] and [`FileSizeSi`] are the two concrete flavours.
//!
//! ```
//! # use leafutils::size::{FileSize, FileSizeSi};
//! assert_eq!(FileSize::new(4_488_998_912).to_string(), "4.2 GiB");
//! assert_eq!(FileSizeSi::new(4_488_998_912).to_string(), "4.5 GB");
//! assert_eq!(FileSize::new(1024).formatted_size(3), "1.000 KiB");
//! assert_eq!(FileSize::new(360).formatted_size(3), "360 B");
//! ```

use std::fmt::{self, Write as _};
use std::marker::PhantomData;
use std::str::FromStr;

use super::parse::parse_size;
use super::unit::{Iec, Magnitude, Si, UnitSystem};

/// Number of fractional digits used when no precision is given.
pub const DEFAULT_PRECISION: usize = 1;

/// An immutable byte count interpreted in the unit system `S`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize<S: UnitSystem = Iec> {
    bytes: u64,
    system: PhantomData<S>,
}

/// Byte count formatted with binary units (KiB, MiB, ...).
pub type FileSize = ByteSize<Iec>;

/// Byte count formatted with decimal units (KB, MB, ...).
pub type FileSizeSi = ByteSize<Si>;

impl<S: UnitSystem> ByteSize<S> {
    /// Wrap a raw byte count.
    #[must_use]
    pub const fn new(bytes: u64) -> Self {
        Self {
            bytes,
            system: PhantomData,
        }
    }

    /// The raw byte count.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.bytes
    }

    /// The largest magnitude whose threshold is `<=` the byte count.
    ///
    /// Zero and anything below the first non-byte threshold is
    /// [`Magnitude::Byte`]. Counts past the top threshold stay in the top class.
    #[must_use]
    pub fn magnitude(self) -> Magnitude {
        Magnitude::ALL
            .iter()
            .rev()
            .copied()
            .find(|&magnitude| self.bytes >= S::threshold(magnitude))
            .unwrap_or(Magnitude::Byte)
    }

    /// The byte count scaled into its magnitude, with the unit label.
    ///
    /// The value is the raw floating point quotient; rounding only happens when
    /// formatting. Exact thresholds yield exactly `1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn filesize_parts(self) -> (f64, &'static str) {
        let magnitude = self.magnitude();
        let label = S::label(magnitude);

        if magnitude == Magnitude::Byte {
            return (self.bytes as f64, label);
        }

        (self.bytes as f64 / S::threshold(magnitude) as f64, label)
    }

    /// Render the size with `precision` digits after the decimal point.
    ///
    /// Byte-class values are always printed as a plain integer (`"360 B"`),
    /// whatever the precision. A precision of 0 prints no decimal point.
    #[must_use]
    pub fn formatted_size(self, precision: usize) -> String {
        format!("{self:.precision$}")
    }

    /// Whether the size classifies into `magnitude`.
    #[must_use]
    pub fn is(self, magnitude: Magnitude) -> bool {
        self.magnitude() == magnitude
    }

    /// Below the first non-byte threshold.
    #[must_use]
    pub fn is_byte(self) -> bool {
        self.is(Magnitude::Byte)
    }

    /// Within the kilo class (KiB / KB).
    #[must_use]
    pub fn is_kilobyte(self) -> bool {
        self.is(Magnitude::Kilo)
    }

    /// Within the mega class (MiB / MB).
    #[must_use]
    pub fn is_megabyte(self) -> bool {
        self.is(Magnitude::Mega)
    }

    /// Within the giga class (GiB / GB).
    #[must_use]
    pub fn is_gigabyte(self) -> bool {
        self.is(Magnitude::Giga)
    }

    /// Within the tera class (TiB / TB).
    #[must_use]
    pub fn is_terabyte(self) -> bool {
        self.is(Magnitude::Tera)
    }

    /// Within the peta class (PiB / PB).
    #[must_use]
    pub fn is_petabyte(self) -> bool {
        self.is(Magnitude::Peta)
    }

    /// Within the exa class (EiB / EB).
    #[must_use]
    pub fn is_exabyte(self) -> bool {
        self.is(Magnitude::Exa)
    }
}

/// Binary-explicit aliases. Each agrees with its generic counterpart.
impl ByteSize<Iec> {
    /// Same as [`Self::is_kilobyte`].
    #[must_use]
    pub fn is_kibibyte(self) -> bool {
        self.is_kilobyte()
    }

    /// Same as [`Self::is_megabyte`].
    #[must_use]
    pub fn is_mebibyte(self) -> bool {
        self.is_megabyte()
    }

    /// Same as [`Self::is_gigabyte`].
    #[must_use]
    pub fn is_gibibyte(self) -> bool {
        self.is_gigabyte()
    }

    /// Same as [`Self::is_terabyte`].
    #[must_use]
    pub fn is_tebibyte(self) -> bool {
        self.is_terabyte()
    }

    /// Same as [`Self::is_petabyte`].
    #[must_use]
    pub fn is_pebibyte(self) -> bool {
        self.is_petabyte()
    }

    /// Same as [`Self::is_exabyte`].
    #[must_use]
    pub fn is_exbibyte(self) -> bool {
        self.is_exabyte()
    }
}

impl<S: UnitSystem> From<u64> for ByteSize<S> {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl<S: UnitSystem> From<ByteSize<S>> for u64 {
    fn from(size: ByteSize<S>) -> Self {
        size.bytes
    }
}

impl<S: UnitSystem> FromStr for ByteSize<S> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s).map(Self::new)
    }
}

/// Uses the formatter's precision when given (`{:.3}`), [`DEFAULT_PRECISION`] otherwise.
///
/// Width, fill and alignment apply to the whole `"<value> <label>"` text and
/// default to left alignment, as for strings.
impl<S: UnitSystem> fmt::Display for ByteSize<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, label) = self.filesize_parts();

        let text = if self.is_byte() {
            format!("{} {label}", self.bytes)
        } else {
            let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
            format!("{value:.precision$} {label}")
        };

        // `Formatter::pad` would treat the precision as a truncation length.
        let Some(width) = f.width() else {
            return f.write_str(&text);
        };
        let padding = width.saturating_sub(text.chars().count());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };

        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}
