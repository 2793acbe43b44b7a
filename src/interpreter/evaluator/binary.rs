use crate::{error::EvaluationError, interpreter::evaluator::core::EvalResult};

#[allow(clippy::unnecessary_wraps)]
pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left + right)
}

#[allow(clippy::unnecessary_wraps)]
pub fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left - right)
}

#[allow(clippy::unnecessary_wraps)]
pub fn multiply(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left * right)
}

/// Divides `left` by `right`.
///
/// # Errors
/// Returns [`EvaluationError::DivisionByZero`] when `right` is exactly zero
/// (either sign).
///
/// # Example
/// ```
/// use keypad::{error::EvaluationError, interpreter::evaluator::binary::divide};
///
/// assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
/// assert_eq!(divide(5.0, 0.0), Err(EvaluationError::DivisionByZero));
/// ```
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvaluationError::DivisionByZero);
    }

    Ok(left / right)
}

/// Raises `base` to the power `exponent`.
///
/// Follows IEEE semantics, so a negative base with a fractional exponent
/// yields NaN rather than an error.
#[allow(clippy::unnecessary_wraps)]
pub fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    Ok(base.powf(exponent))
}
