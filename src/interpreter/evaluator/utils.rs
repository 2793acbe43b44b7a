/// Largest `n` whose factorial is finite as an `f64`.
pub const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Multiplies `1 × 2 × … × n` in floating point.
///
/// The caller guarantees `n` is a finite, non-negative integer. Anything above
/// [`MAX_FINITE_FACTORIAL`] overflows, so the product is skipped and `+∞` is
/// returned directly.
///
/// # Example
/// ```
/// use keypad::interpreter::evaluator::utils::float_factorial;
///
/// assert_eq!(float_factorial(0.0), 1.0);
/// assert_eq!(float_factorial(6.0), 720.0);
/// assert!(float_factorial(171.0).is_infinite());
/// ```
#[must_use]
pub fn float_factorial(n: f64) -> f64 {
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }

    let mut result = 1.0;
    let mut factor = 2.0;
    while factor <= n {
        result *= factor;
        factor += 1.0;
    }
    result
}
