use thiserror::Error;

/// Represents every way turning an expression string into a number can fail.
///
/// Tokenizer failures carry the byte offset of the offending input so the
/// caller can point at it. Evaluation failures describe the reduction that
/// went wrong. Every variant aborts the whole evaluation; there is no partial
/// result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The tokenizer met a character that is not a digit, a decimal point, an
    /// operator symbol or a parenthesis.
    #[error("Error at position {position}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The unrecognized character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A run of digits and decimal points could not be read as a number,
    /// for example `1.2.3`.
    #[error("Error at position {position}: Malformed number '{literal}'.")]
    MalformedNumber {
        /// The offending run of digits and decimal points.
        literal:  String,
        /// Byte offset of the run in the input.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that was never closed.
    #[error("Error: Unbalanced parenthesis.")]
    UnbalancedParenthesis,
    /// An operator had fewer operands available than its arity requires.
    #[error("Error: Not enough operands for operator '{operator}'.")]
    EmptyOperandStack {
        /// Symbol of the operator that could not be applied.
        operator: char,
    },
    /// The expression did not reduce to exactly one value.
    #[error("Error: Malformed expression, {remaining} values left after evaluation.")]
    MalformedExpression {
        /// Number of operands left on the stack (0 for empty input).
        remaining: usize,
    },
    /// Attempted division by zero.
    #[error("Error: Division by zero.")]
    DivisionByZero,
    /// Factorial of a negative number.
    #[error("Error: Factorial not defined for negative number {value}.")]
    NegativeFactorial {
        /// The operand.
        value: f64,
    },
    /// Factorial of a number with a fractional part.
    #[error("Error: Factorial is only defined for integers, but found {value}.")]
    NonIntegerFactorial {
        /// The operand.
        value: f64,
    },
}
