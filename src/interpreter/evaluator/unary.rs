use crate::{
    error::EvaluationError,
    interpreter::evaluator::{core::EvalResult, utils::float_factorial},
};

/// Square root of `value`. Negative operands give NaN.
#[allow(clippy::unnecessary_wraps)]
pub fn square_root(value: f64) -> EvalResult<f64> {
    Ok(value.sqrt())
}

/// Converts a percentage to a fraction: `value / 100`.
#[allow(clippy::unnecessary_wraps)]
pub fn percentage(value: f64) -> EvalResult<f64> {
    Ok(value / 100.0)
}

/// Computes `value!` for non-negative integral operands.
///
/// `0!` is `1`. The product is accumulated in floating point, so results
/// beyond `170!` are `+∞`.
///
/// # Errors
/// - [`EvaluationError::NegativeFactorial`] when `value < 0`.
/// - [`EvaluationError::NonIntegerFactorial`] when `value` has a fractional
///   part, is NaN, or is `+∞`.
///
/// # Example
/// ```
/// use keypad::{error::EvaluationError, interpreter::evaluator::unary::factorial};
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert_eq!(factorial(-1.0), Err(EvaluationError::NegativeFactorial { value: -1.0 }));
/// assert_eq!(factorial(3.5), Err(EvaluationError::NonIntegerFactorial { value: 3.5 }));
/// ```
pub fn factorial(value: f64) -> EvalResult<f64> {
    if value < 0.0 {
        return Err(EvaluationError::NegativeFactorial { value });
    }

    if value.fract() != 0.0 || !value.is_finite() {
        return Err(EvaluationError::NonIntegerFactorial { value });
    }

    Ok(float_factorial(value))
}
