//! Fixed-point coordinate formatting.
//!
//! The service expects coordinates with exactly seven fractional digits and
//! never in scientific notation. Rust's `{:.7}` already rounds the exact
//! binary value correctly; the only case it resolves differently from
//! half-away-from-zero is an exact tie, which for an `f64` can only happen
//! when the value has exactly eight binary fractional digits.

use crate::error::GeocodeError;

/// Number of digits after the decimal point in every formatted coordinate.
pub const COORDINATE_PRECISION: usize = 7;

/// Format a coordinate as a fixed-point decimal string with seven fractional
/// digits, rounding exact ties away from zero.
///
/// Fails with `NonFiniteCoordinate` for NaN and infinities.
pub fn format_coordinate(value: f64) -> Result<String, GeocodeError> {
    if !value.is_finite() {
        return Err(GeocodeError::NonFiniteCoordinate(value));
    }
    if is_exact_tie(value) {
        // Eight digits are exact here, and the eighth is always a 5.
        let mut digits = format!("{value:.8}");
        digits.pop();
        return Ok(increment_last_digit(digits));
    }
    Ok(format!("{value:.prec$}", prec = COORDINATE_PRECISION))
}

/// Format a list of coordinates and join them with commas, preserving order.
pub fn format_coordinates(values: &[f64]) -> Result<String, GeocodeError> {
    let formatted = values
        .iter()
        .map(|v| format_coordinate(*v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(formatted.join(","))
}

/// A dyadic rational `n / 2^k` with odd `n` has exactly `k` decimal fractional
/// digits, so a tie at the eighth digit means `k == 8`.
fn is_exact_tie(value: f64) -> bool {
    (value * 256.0).fract() == 0.0 && (value * 128.0).fract() != 0.0
}

/// Add one unit in the last place to a decimal string, moving away from zero.
fn increment_last_digit(digits: String) -> String {
    let mut bytes = digits.into_bytes();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'9' => *b = b'0',
            b'0'..=b'8' => {
                *b += 1;
                carry = false;
                break;
            }
            _ => {}
        }
    }
    if carry {
        let at = usize::from(bytes.first() == Some(&b'-'));
        bytes.insert(at, b'1');
    }
    // Only ASCII digits were touched.
    String::from_utf8(bytes).unwrap_or_default()
}
