/// The evaluator module reduces token sequences to a number.
///
/// The evaluator walks the tokens once, keeping pending operators and operands
/// on two stacks and applying operators in precedence order. It is the core
/// execution engine of the calculator.
///
/// # Responsibilities
/// - Applies operators by precedence, honoring parentheses.
/// - Implements the arithmetic behind every operator symbol.
/// - Reports errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module tokenizes calculator input.
///
/// The lexer reads the raw expression text and produces tokens for numbers,
/// operators and parentheses. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Folds a sign in operand position into the following number.
/// - Reports invalid characters and malformed numbers with their position.
pub mod lexer;
/// The operator table.
///
/// Maps each operator symbol to its fixed precedence, arity and operation.
pub mod operator;
/// The token type shared by the lexer and the evaluator.
pub mod token;
