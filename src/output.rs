//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures for the results of the
//! `size`, `du` and `exec` commands. When the `--json` flag is passed, these
//! structures are serialized to stdout instead of the human-readable output.

use std::path::Path;

use serde::Serialize;

use crate::config::SizeOptions;
use crate::shell::Execute;
use crate::size::size_parts;

/// One formatted byte count.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonSize {
    /// Raw byte count.
    pub bytes: u64,

    /// Byte count scaled into its unit, unrounded.
    pub value: f64,

    /// Unit label (`"GiB"`, `"KB"`, ...).
    pub unit: &'static str,

    /// Magnitude class name (`"byte"`, `"kilo"`, ...).
    pub magnitude: &'static str,

    /// Unit system used (`"iec"` or `"si"`).
    pub units: &'static str,

    /// Display string at the requested precision.
    pub formatted: String,
}

/// Output of the `size` command for one input.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonSizeEntry {
    /// The argument as given on the command line.
    pub input: String,

    /// The formatted size.
    #[serde(flatten)]
    pub size: JsonSize,
}

/// Output of the `du` command for one path.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonDiskUsage {
    /// The measured path.
    pub path: String,

    /// Total size of the regular files below it.
    #[serde(flatten)]
    pub size: JsonSize,
}

/// Output of the `exec` command.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonExec {
    /// The command line that was run.
    pub command: String,

    /// Exit code, `null` when terminated by a signal.
    pub status: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,
}

impl JsonSize {
    /// Describe `bytes` using the resolved formatting options.
    #[must_use]
    pub fn new(bytes: u64, options: &SizeOptions) -> Self {
        let (value, unit, magnitude) = size_parts(bytes, options.units);
        Self {
            bytes,
            value,
            unit,
            magnitude: magnitude.name(),
            units: options.units.name(),
            formatted: options.format(bytes),
        }
    }
}

impl JsonSizeEntry {
    #[must_use]
    pub fn new(input: &str, bytes: u64, options: &SizeOptions) -> Self {
        Self {
            input: input.to_string(),
            size: JsonSize::new(bytes, options),
        }
    }
}

impl JsonDiskUsage {
    #[must_use]
    pub fn new(path: &Path, bytes: u64, options: &SizeOptions) -> Self {
        Self {
            path: path.display().to_string(),
            size: JsonSize::new(bytes, options),
        }
    }
}

impl From<&Execute> for JsonExec {
    fn from(result: &Execute) -> Self {
        Self {
            command: result.command().to_string(),
            status: result.exit_status(),
            stdout: result.standard_output().to_string(),
            stderr: result.standard_error().to_string(),
        }
    }
}
