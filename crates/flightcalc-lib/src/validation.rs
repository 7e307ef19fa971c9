//! Input guards shared by the calculators and the parameter loader.

use crate::error::{Error, Result};

/// Reject NaN and infinities.
pub fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_argument(
            name,
            value,
            "must be a finite number",
        ));
    }
    Ok(value)
}

/// Reject a computed result that overflowed to infinity or became NaN.
pub fn ensure_finite_result(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::NonFiniteResult {
            name: name.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Reject non-finite values and anything below zero.
pub fn ensure_non_negative(name: &str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(Error::invalid_argument(name, value, "must be non-negative"));
    }
    Ok(value)
}

/// Parse a textual quantity, rejecting anything that is not a finite number.
///
/// The offending text is echoed back verbatim in the error so callers can
/// report exactly what was supplied.
///
/// # Examples
/// ```
/// use flightcalc_lib::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("velocity_kmh", " 10000 ").unwrap(), 10_000.0);
/// assert!(parse_quantity("velocity_kmh", "fast").is_err());
/// assert!(parse_quantity("velocity_kmh", "inf").is_err());
/// ```
pub fn parse_quantity(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::invalid_argument(name, format!("{raw:?}"), "must be a number"))?;
    if !value.is_finite() {
        return Err(Error::invalid_argument(
            name,
            format!("{raw:?}"),
            "must be a finite number",
        ));
    }
    Ok(value)
}
