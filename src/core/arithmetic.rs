//! Stateless arithmetic over [`Number`].
//!
//! `add` and `subtract` keep integer results integral and fall back to
//! floating point when an operand is a float or the integer result would
//! overflow. `divide` is always true division.

use crate::core::Number;
use crate::utils::error::{CalcError, Result};

pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map_or_else(|| Number::Float(x as f64 + y as f64), Number::Int),
        (x, y) => Number::Float(x.as_f64() + y.as_f64()),
    }
}

pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_sub(y)
            .map_or_else(|| Number::Float(x as f64 - y as f64), Number::Int),
        (x, y) => Number::Float(x.as_f64() - y.as_f64()),
    }
}

/// Fails with [`CalcError::InvalidArgument`] when `b` is zero (`0`, `0.0` or `-0.0`).
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return Err(CalcError::invalid_argument("Cannot divide by zero"));
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}
