use crate::{
    error::EvaluationError,
    interpreter::{
        operator::{Operation, Operator},
        token::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    /// A real operator waiting to be applied.
    Operator(Operator),
    /// An open parenthesis. Bounds a scope and is never applied.
    Marker,
}

/// Stores the state of one evaluation.
///
/// `Evaluator` implements operator-precedence evaluation with two explicit
/// stacks: pending operators (and parenthesis markers) and pending operands.
/// Tokens are fed one at a time with [`Evaluator::push`]; [`Evaluator::finish`]
/// drains the remaining operators and returns the single value left.
///
/// An operator reduces every operator below it with an equal or higher
/// precedence before being pushed, so operators of the same precedence
/// evaluate left to right (`2^3^2` is `(2^3)^2`).
///
/// ## Usage
///
/// Most callers use [`evaluate`] which feeds a whole token slice. The stacks
/// are owned by the evaluator, so independent evaluations never share state.
#[derive(Debug, Default)]
pub struct Evaluator {
    operators: Vec<StackEntry>,
    operands:  Vec<f64>,
}

impl Evaluator {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub const fn new() -> Self {
        Self { operators: Vec::new(),
               operands:  Vec::new(), }
    }

    /// Feeds the next token.
    ///
    /// # Errors
    /// - [`EvaluationError::UnbalancedParenthesis`] for a `)` with no open
    ///   parenthesis.
    /// - Any error raised by an operator reduced while handling the token.
    pub fn push(&mut self, token: Token) -> EvalResult<()> {
        match token {
            Token::Number(value) => self.operands.push(value),
            Token::Operator(operator) => {
                self.reduce_while_at_least(operator.precedence())?;
                self.operators.push(StackEntry::Operator(operator));
            },
            Token::LeftParenthesis => self.operators.push(StackEntry::Marker),
            Token::RightParenthesis => self.close_parenthesis()?,
        }
        Ok(())
    }

    /// Drains the operator stack and returns the result.
    ///
    /// # Errors
    /// - [`EvaluationError::UnbalancedParenthesis`] if a parenthesis was left
    ///   open.
    /// - [`EvaluationError::MalformedExpression`] unless exactly one operand is
    ///   left.
    /// - Any error raised by a remaining operator.
    pub fn finish(mut self) -> EvalResult<f64> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Operator(operator) => self.apply(operator)?,
                StackEntry::Marker => return Err(EvaluationError::UnbalancedParenthesis),
            }
        }

        match self.operands.as_slice() {
            [result] => Ok(*result),
            rest => Err(EvaluationError::MalformedExpression { remaining: rest.len() }),
        }
    }

    /// Applies operators from the top of the stack while they bind at least as
    /// tightly as `precedence`. Stops at a marker.
    fn reduce_while_at_least(&mut self, precedence: u8) -> EvalResult<()> {
        while let Some(&StackEntry::Operator(top)) = self.operators.last()
              && top.precedence() >= precedence
        {
            self.operators.pop();
            self.apply(top)?;
        }
        Ok(())
    }

    /// Applies operators until the matching marker, then discards it.
    fn close_parenthesis(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(StackEntry::Operator(operator)) => self.apply(operator)?,
                Some(StackEntry::Marker) => return Ok(()),
                None => return Err(EvaluationError::UnbalancedParenthesis),
            }
        }
    }

    /// Pops the operands `operator` needs, applies it and pushes the result.
    ///
    /// For binary operators the operand popped second is the left argument.
    fn apply(&mut self, operator: Operator) -> EvalResult<()> {
        let missing = || EvaluationError::EmptyOperandStack { operator: operator.symbol() };

        let result = match operator.operation() {
            Operation::Unary(function) => {
                let operand = self.operands.pop().ok_or_else(missing)?;
                function(operand)?
            },
            Operation::Binary(function) => {
                let right = self.operands.pop().ok_or_else(missing)?;
                let left = self.operands.pop().ok_or_else(missing)?;
                function(left, right)?
            },
        };

        tracing::trace!(operator = %operator.symbol(), result, "applied operator");

        self.operands.push(result);
        Ok(())
    }
}

/// Evaluates a token sequence to a single number.
///
/// This is the main entry point of the evaluator. It accepts tokens from any
/// source, not only the tokenizer.
///
/// # Errors
/// Returns the first [`EvaluationError`] raised while reducing the
/// expression; no partial result is produced.
///
/// # Example
/// ```
/// use keypad::{
///     error::EvaluationError,
///     interpreter::{evaluator::core::evaluate, operator::Operator, token::Token},
/// };
///
/// let plus = Operator::lookup('+').unwrap();
/// let times = Operator::lookup('*').unwrap();
///
/// // 2 + 3 * 4
/// let tokens = [Token::Number(2.0),
///               Token::Operator(plus),
///               Token::Number(3.0),
///               Token::Operator(times),
///               Token::Number(4.0)];
/// assert_eq!(evaluate(&tokens).unwrap(), 14.0);
///
/// // + 2
/// let tokens = [Token::Operator(plus), Token::Number(2.0)];
/// assert_eq!(evaluate(&tokens),
///            Err(EvaluationError::EmptyOperandStack { operator: '+' }));
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    let mut evaluator = Evaluator::new();
    for token in tokens {
        evaluator.push(*token)?;
    }
    evaluator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::{ADD, DIVIDE, EXPONENT, FACTORIAL, SUBTRACT};

    #[test]
    fn marker_stops_reduction() {
        let mut evaluator = Evaluator::new();
        for token in [Token::Number(2.0),
                      Token::Operator(EXPONENT),
                      Token::LeftParenthesis,
                      Token::Number(1.0),
                      Token::Operator(ADD)]
        {
            evaluator.push(token).unwrap();
        }

        assert_eq!(evaluator.operators,
                   vec![StackEntry::Operator(EXPONENT), StackEntry::Marker, StackEntry::Operator(ADD)]);
        assert_eq!(evaluator.operands, vec![2.0, 1.0]);
    }

    #[test]
    fn binary_operands_keep_their_order() {
        let tokens = [Token::Number(8.0), Token::Operator(SUBTRACT), Token::Number(3.0)];
        assert_eq!(evaluate(&tokens).unwrap(), 5.0);

        let tokens = [Token::Number(8.0), Token::Operator(DIVIDE), Token::Number(2.0)];
        assert_eq!(evaluate(&tokens).unwrap(), 4.0);
    }

    #[test]
    fn leftover_marker_is_unbalanced() {
        let tokens = [Token::LeftParenthesis, Token::Number(1.0)];
        assert_eq!(evaluate(&tokens), Err(EvaluationError::UnbalancedParenthesis));
    }

    #[test]
    fn empty_parentheses_leave_nothing() {
        let tokens = [Token::LeftParenthesis, Token::RightParenthesis];
        assert_eq!(evaluate(&tokens), Err(EvaluationError::MalformedExpression { remaining: 0 }));
    }

    #[test]
    fn lone_unary_operator_has_no_operand() {
        let tokens = [Token::Operator(FACTORIAL)];
        assert_eq!(evaluate(&tokens), Err(EvaluationError::EmptyOperandStack { operator: '!' }));
    }
}
