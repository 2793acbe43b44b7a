use logos::Logos;

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::EvalResult,
        operator::{Operator, SUBTRACT},
        token::Token,
    },
};

/// Represents a raw lexical unit recognized in calculator input.
///
/// `Lexeme` is what the `logos` generated lexer produces. [`tokenize`] turns
/// the lexemes into [`Token`]s, resolving operator symbols through the
/// operator table and folding signed literals.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// A greedy run of digits and decimal points, such as `3.14`, `.5` or
    /// `12`. Runs that do not form a valid number (`1.2.3`) are rejected.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// One of the single-character operator symbols.
    #[token("+", |_| '+')]
    #[token("-", |_| '-')]
    #[token("*", |_| '*')]
    #[token("/", |_| '/')]
    #[token("^", |_| '^')]
    #[token("√", |_| '√')]
    #[token("%", |_| '%')]
    #[token("!", |_| '!')]
    Symbol(char),
    /// `(`
    #[token("(")]
    LeftParenthesis,
    /// `)`
    #[token(")")]
    RightParenthesis,
}

/// Parses a numeric run from the current lexeme slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the run is not a valid float, such as `1.2.3` or `.`.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts an expression string into a sequence of tokens.
///
/// The input is scanned once from left to right. Digits and decimal points
/// form greedy number runs, every operator symbol becomes an
/// [`Token::Operator`] with its fixed precedence and operation, and `(` / `)`
/// become parenthesis sentinels. A `-` standing where an operand is expected
/// (input start, after `(`, or after any operator except the postfix `!` and
/// `%`) is folded into the number that follows it, so `(-1)` holds the literal
/// `-1` rather than a dangling subtraction.
///
/// No whitespace is accepted. The first unrecognized character fails the
/// whole call.
///
/// # Errors
/// - [`EvaluationError::InvalidCharacter`] for any character outside the
///   calculator alphabet.
/// - [`EvaluationError::MalformedNumber`] for a numeric run that does not
///   parse, such as `1.2.3`.
///
/// # Example
/// ```
/// use keypad::interpreter::{lexer::tokenize, token::Token};
///
/// let tokens = tokenize("(2+3)*4").unwrap();
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[0], Token::LeftParenthesis);
/// assert_eq!(tokens[1], Token::Number(2.0));
///
/// let signed = tokenize("2*-3").unwrap();
/// assert_eq!(signed[2], Token::Number(-3.0));
///
/// assert!(tokenize("2&3").is_err());
/// ```
pub fn tokenize(input: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(input);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;

        let Ok(lexeme) = lexeme else {
            return Err(lexing_error(input, lexer.slice(), position));
        };

        match lexeme {
            Lexeme::Number(value) => push_number(&mut tokens, value),
            Lexeme::Symbol(symbol) => {
                let operator =
                    Operator::lookup(symbol).ok_or(EvaluationError::InvalidCharacter { character:
                                                                                           symbol,
                                                                                       position })?;
                tokens.push(Token::Operator(operator));
            },
            Lexeme::LeftParenthesis => tokens.push(Token::LeftParenthesis),
            Lexeme::RightParenthesis => tokens.push(Token::RightParenthesis),
        }
    }

    tracing::trace!(input, count = tokens.len(), "tokenized expression");

    Ok(tokens)
}

/// Pushes a number, absorbing a preceding `-` that stands in operand position.
fn push_number(tokens: &mut Vec<Token>, value: f64) {
    let signed = match tokens.as_slice() {
        [.., before, Token::Operator(minus)] => *minus == SUBTRACT && expects_operand(before),
        [Token::Operator(minus)] => *minus == SUBTRACT,
        _ => false,
    };

    if signed {
        tokens.pop();
        tokens.push(Token::Number(-value));
    } else {
        tokens.push(Token::Number(value));
    }
}

/// Returns `true` when the token leaves the expression waiting for an operand.
fn expects_operand(token: &Token) -> bool {
    match token {
        Token::LeftParenthesis => true,
        Token::Operator(operator) => !operator.is_postfix(),
        Token::Number(_) | Token::RightParenthesis => false,
    }
}

/// Builds the error for input the lexer could not match.
///
/// A failing slice that starts a numeric run is a malformed number; anything
/// else is reported as the single character found at `position`.
fn lexing_error(input: &str, slice: &str, position: usize) -> EvaluationError {
    if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return EvaluationError::MalformedNumber { literal: slice.to_string(),
                                                  position };
    }

    let character = input.get(position..)
                         .and_then(|rest| rest.chars().next())
                         .unwrap_or(char::REPLACEMENT_CHARACTER);

    EvaluationError::InvalidCharacter { character, position }
}
