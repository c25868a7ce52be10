//! Unit systems and magnitude classes for byte sizes.
//!
//! A unit system is a static table: one label per [`Magnitude`], where the
//! threshold of magnitude `k` is `BASE^k`. Two systems are provided:
//!
//! - [`Iec`]: binary units, base 1024 (`KiB`, `MiB`, `GiB`, ...)
//! - [`Si`]: decimal units, base 1000 (`KB`, `MB`, `GB`, ...)
//!
//! Zettabyte and yottabyte classes are absent: their thresholds do not fit
//! in a `u64`, which is the domain of every byte count in this crate.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A byte magnitude class, ordered from smallest to largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Magnitude {
    /// Plain bytes
    Byte,
    /// KiB / KB
    Kilo,
    /// MiB / MB
    Mega,
    /// GiB / GB
    Giga,
    /// TiB / TB
    Tera,
    /// PiB / PB
    Peta,
    /// EiB / EB
    Exa,
}

impl Magnitude {
    /// Every magnitude, smallest first.
    pub const ALL: [Self; 7] = [
        Self::Byte,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
    ];

    /// Exponent applied to the unit system's base for this magnitude.
    #[must_use]
    pub const fn power(self) -> u32 {
        self as u32
    }

    /// Human name of the class, independent of unit system (`"giga"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Kilo => "kilo",
            Self::Mega => "mega",
            Self::Giga => "giga",
            Self::Tera => "tera",
            Self::Peta => "peta",
            Self::Exa => "exa",
        }
    }
}

/// Static description of a unit system.
///
/// Implementors are zero-sized markers; all behavior lives in
/// [`ByteSize`](super::ByteSize), which is generic over this trait.
pub trait UnitSystem: Copy + Default + std::fmt::Debug + Send + Sync + 'static {
    /// Short identifier (`"iec"` / `"si"`)
    const NAME: &'static str;

    /// Multiplier between two consecutive magnitudes
    const BASE: u64;

    /// Labels indexed by [`Magnitude::power`]
    const LABELS: [&'static str; 7];

    /// Minimum byte count that classifies into `magnitude`.
    #[must_use]
    fn threshold(magnitude: Magnitude) -> u64 {
        Self::BASE.pow(magnitude.power())
    }

    /// Unit label for `magnitude` (e.g. `"GiB"`).
    #[must_use]
    fn label(magnitude: Magnitude) -> &'static str {
        Self::LABELS[magnitude as usize]
    }
}

/// Binary (IEC 80000-13) units, base 1024.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iec;

impl UnitSystem for Iec {
    const NAME: &'static str = "iec";
    const BASE: u64 = 1024;
    const LABELS: [&'static str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
}

/// Decimal (SI) units, base 1000.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Si;

impl UnitSystem for Si {
    const NAME: &'static str = "si";
    const BASE: u64 = 1000;
    const LABELS: [&'static str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
}

/// Runtime choice of unit system, for configuration files and the CLI.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Binary units (KiB, MiB, ...)
    #[default]
    Iec,

    /// Decimal units (KB, MB, ...)
    Si,
}

impl Units {
    /// Short identifier, matching [`UnitSystem::NAME`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iec => Iec::NAME,
            Self::Si => Si::NAME,
        }
    }
}
