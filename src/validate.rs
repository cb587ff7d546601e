//! Parsing and validation of user-supplied numeric input.
//!
//! The rasterizers take already-typed integers. Anything arriving as text
//! (command line, forms) goes through here first so that rejections carry the
//! same [`Error`] taxonomy as the library.

use crate::error::{Error, Result};

/// Parse integer-valued text.
///
/// Accepts plain integers and integer-valued decimals such as `"5.0"` or
/// `"1e3"`. Surrounding whitespace is ignored.
pub fn parse_integer(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let value: f64 = trimmed.parse().map_err(|_| Error::InvalidNumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(Error::InvalidNumber(trimmed.to_string()));
    }
    if value.fract() != 0.0 {
        return Err(Error::NotAnInteger(trimmed.to_string()));
    }
    // i64::MAX is not representable; 2^63 as f64 is the first value past it.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(Error::OutOfRange(trimmed.to_string()));
    }
    Ok(value as i64)
}

/// Parse a lattice coordinate.
pub fn parse_coordinate(text: &str) -> Result<i32> {
    let value = parse_integer(text)?;
    i32::try_from(value).map_err(|_| Error::OutOfRange(text.trim().to_string()))
}

/// Parse a circle radius, rejecting anything that is not a positive integer.
pub fn parse_radius(text: &str) -> Result<i32> {
    validate_radius(parse_integer(text)?)
}

/// Check an already-numeric radius.
pub fn validate_radius(radius: i64) -> Result<i32> {
    if radius < 1 {
        return Err(Error::InvalidRadius { radius });
    }
    i32::try_from(radius).map_err(|_| Error::OutOfRange(radius.to_string()))
}
