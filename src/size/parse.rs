//! Parsing human-readable size strings.
//!
//! Accepts the same labels the formatter produces, in either unit system, so
//! that `"920.7 KiB"` or `"4.5GB"` can be turned back into a byte count.

use anyhow::Result;

use super::unit::{Iec, Magnitude, Si, UnitSystem};

/// Maximum number of fractional digits accepted in a decimal size.
const MAX_FRACTION_DIGITS: usize = 9;

/// Fixed-point scale of the parsed fractional part (10^9).
const FRACTION_SCALE: u64 = 1_000_000_000;

/// Parse a human-readable size string into bytes.
///
/// Supports decimal (KB..EB) and binary (KiB..EiB) units, an explicit `B`
/// suffix, whitespace between number and unit, and decimal numbers
/// (e.g. `"1.5GB"`). Matching is case-insensitive.
///
/// # Errors
///
/// This function will return an error if:
/// - The size string format is invalid (e.g. `"1.2.3MB"`, `"invalid"`)
/// - The number cannot be parsed as a valid integer or decimal
/// - The decimal has more than 9 fractional digits
/// - The resulting value would overflow `u64`
///
/// # Examples
///
/// ```
/// # use leafutils::size::parse_size;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// assert_eq!(parse_size("100KB")?, 100_000);
/// assert_eq!(parse_size("1.5 MiB")?, 1_572_864);
/// assert_eq!(parse_size("360 B")?, 360);
/// # Ok(())
/// # }
/// ```
pub fn parse_size(size_str: &str) -> Result<u64> {
    let size_str = size_str.trim().to_uppercase();
    let (number_str, multiplier) = parse_size_unit(&size_str);
    let number_str = number_str.trim_end();

    if number_str.contains('.') {
        parse_decimal_size(number_str, multiplier)
    } else {
        parse_integer_size(number_str, multiplier)
    }
}

/// Split off the (upper-cased) unit suffix and return the numeric part with its multiplier.
///
/// Binary suffixes are tried before decimal ones, and the bare `B` last, so
/// that `"KIB"` is never mistaken for `"B"`.
fn parse_size_unit(size_str: &str) -> (&str, u64) {
    let binary = Magnitude::ALL.iter().skip(1).map(|&m| (Iec::label(m), Iec::threshold(m)));
    let decimal = Magnitude::ALL.iter().skip(1).map(|&m| (Si::label(m), Si::threshold(m)));

    for (label, multiplier) in binary.chain(decimal) {
        if let Some(number) = size_str.strip_suffix(label.to_uppercase().as_str()) {
            return (number, multiplier);
        }
    }

    size_str
        .strip_suffix('B')
        .map_or((size_str, 1), |number| (number, 1))
}

/// Parse a decimal size value (e.g. `"1.5"`).
fn parse_decimal_size(number_str: &str, multiplier: u64) -> Result<u64> {
    let Some((integer_str, fractional_str)) = number_str.split_once('.') else {
        return Err(anyhow::anyhow!("Invalid decimal format: {number_str}"));
    };

    if fractional_str.contains('.') || (integer_str.is_empty() && fractional_str.is_empty()) {
        return Err(anyhow::anyhow!("Invalid decimal format: {number_str}"));
    }

    let integer_part: u64 = if integer_str.is_empty() {
        0
    } else {
        integer_str.parse()?
    };
    let fractional_part = parse_fractional_part(fractional_str)?;

    let integer_bytes = multiply_with_overflow_check(integer_part, multiplier)?;
    let fractional_bytes = u128::from(fractional_part) * u128::from(multiplier)
        / u128::from(FRACTION_SCALE);
    let fractional_bytes = u64::try_from(fractional_bytes)
        .map_err(|_| anyhow::anyhow!("Size value overflow: {number_str}"))?;

    add_with_overflow_check(integer_bytes, fractional_bytes)
}

/// Parse the fractional digits into a fixed-point value scaled by 10^9.
fn parse_fractional_part(fractional_str: &str) -> Result<u64> {
    let fractional_digits = fractional_str.len();
    if fractional_digits > MAX_FRACTION_DIGITS {
        return Err(anyhow::anyhow!("Too many decimal places: {fractional_str}"));
    }
    if !fractional_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow::anyhow!("Invalid fractional part: {fractional_str}"));
    }
    if fractional_str.is_empty() {
        return Ok(0);
    }

    let fractional_part: u64 = fractional_str.parse()?;
    let scale = 10u64.pow(u32::try_from(MAX_FRACTION_DIGITS - fractional_digits)?);

    Ok(fractional_part * scale)
}

/// Parse an integer size value.
fn parse_integer_size(number_str: &str, multiplier: u64) -> Result<u64> {
    let number: u64 = number_str.parse()?;
    multiply_with_overflow_check(number, multiplier)
}

/// Multiply two values with overflow checking.
fn multiply_with_overflow_check(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b)
        .ok_or_else(|| anyhow::anyhow!("Size value overflow: {a} * {b}"))
}

/// Add two values with overflow checking.
fn add_with_overflow_check(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b)
        .ok_or_else(|| anyhow::anyhow!("Final overflow: {a} + {b}"))
}
