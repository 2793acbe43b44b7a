use std::fmt;

use crate::interpreter::operator::Operator;

/// Represents one lexical unit of a calculator expression.
///
/// Tokens are produced by [`tokenize`](crate::interpreter::lexer::tokenize)
/// and consumed by the evaluator. They are plain values; a sequence is built
/// once per evaluation and dropped afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// An operator with its fixed precedence and operation.
    Operator(Operator),
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(operator) => write!(f, "{}", operator.symbol()),
            Self::LeftParenthesis => write!(f, "("),
            Self::RightParenthesis => write!(f, ")"),
        }
    }
}
