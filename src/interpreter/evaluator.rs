/// Two-stack evaluation engine.
///
/// Holds the operator and operand stacks, the reduction step shared by every
/// operator, and the evaluator result type.
pub mod core;

/// Binary operation functions.
///
/// Addition, subtraction, multiplication, division and exponentiation on
/// `f64` operands. Division reports a zero divisor.
pub mod binary;

/// Unary operation functions.
///
/// Square root, percentage and factorial. Factorial checks its domain.
pub mod unary;

/// Numeric helpers shared by the operation functions.
pub mod utils;
