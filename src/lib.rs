//! # keypad
//!
//! keypad is a calculator expression engine written in Rust.
//! It tokenizes an arithmetic expression made of numbers, binary and unary
//! operators and parentheses, and evaluates it with a two-stack
//! operator-precedence algorithm.
//!
//! | symbol | precedence | arity  | meaning           |
//! |--------|------------|--------|-------------------|
//! | `+`    | 1          | binary | addition          |
//! | `-`    | 1          | binary | subtraction       |
//! | `*`    | 2          | binary | multiplication    |
//! | `/`    | 2          | binary | division          |
//! | `^`    | 3          | binary | exponentiation    |
//! | `√`    | 4          | unary  | square root       |
//! | `%`    | 4          | unary  | percentage        |
//! | `!`    | 5          | unary  | factorial         |

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::evaluate, lexer::tokenize},
    util::format::format_result,
};

/// Provides the error type for tokenizing and evaluation.
///
/// This module defines every failure that can occur while turning an
/// expression string into a number: unrecognized characters, malformed
/// numbers, unbalanced parentheses, missing operands and arithmetic domain
/// errors.
///
/// # Responsibilities
/// - Defines one error enum covering the lexer and the evaluator.
/// - Attaches input positions to lexing errors.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates tokenizing and evaluation.
///
/// This module ties together the lexer, the operator table and the two-stack
/// evaluator.
///
/// # Responsibilities
/// - Converts expression text into tokens.
/// - Defines the operators with their precedence and arity.
/// - Evaluates token sequences to a number.
pub mod interpreter;
/// General utilities.
///
/// # Responsibilities
/// - Formats results for display.
pub mod util;

/// The indicator shown in place of a result when evaluation fails.
pub const ERROR_INDICATOR: &str = "ERROR";

/// Tokenizes and evaluates an expression.
///
/// This is the single entry point for callers that assemble an expression
/// string and need its value. The specific failure is preserved in the
/// returned error.
///
/// # Errors
/// Returns an [`EvaluationError`] if the input contains an invalid character
/// or a malformed number, if the expression is not well formed, or if an
/// arithmetic domain error occurs.
///
/// # Examples
/// ```
/// use keypad::{error::EvaluationError, evaluate_expression};
///
/// assert_eq!(evaluate_expression("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(evaluate_expression("5/0"), Err(EvaluationError::DivisionByZero));
/// ```
pub fn evaluate_expression(input: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(input)?;
    let result = evaluate(&tokens);

    match &result {
        Ok(value) => tracing::debug!(input, value, "evaluated expression"),
        Err(e) => tracing::debug!(input, error = %e, "evaluation failed"),
    }

    result
}

/// Evaluates an expression and formats the outcome for display.
///
/// Every failure collapses to [`ERROR_INDICATOR`]. Use
/// [`evaluate_expression`] to inspect the specific error.
///
/// # Examples
/// ```
/// use keypad::calculate;
///
/// assert_eq!(calculate("10/4"), "2.5");
/// assert_eq!(calculate("2*2"), "4");
/// assert_eq!(calculate("5/0"), "ERROR");
/// ```
#[must_use]
pub fn calculate(input: &str) -> String {
    evaluate_expression(input).map_or_else(|_| ERROR_INDICATOR.to_string(), format_result)
}
