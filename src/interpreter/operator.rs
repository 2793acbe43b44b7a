use crate::interpreter::evaluator::{binary, core::EvalResult, unary};

/// The function an operator applies, tagged by arity.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Consumes one operand.
    Unary(fn(f64) -> EvalResult<f64>),
    /// Consumes two operands, left then right.
    Binary(fn(f64, f64) -> EvalResult<f64>),
}

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand.
    Unary,
    /// Two operands.
    Binary,
}

impl Arity {
    /// Returns how many operands must be popped for this arity.
    #[must_use]
    pub const fn operands(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// An entry of the operator table.
///
/// Operators are only obtained from the table (see [`Operator::lookup`]), so
/// the precedence of a symbol never changes. Two operators compare equal when
/// their symbols do.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    symbol:     char,
    precedence: u8,
    operation:  Operation,
}

/// `a + b`
pub const ADD: Operator = Operator { symbol:     '+',
                                     precedence: 1,
                                     operation:  Operation::Binary(binary::add), };
/// `a - b`
pub const SUBTRACT: Operator = Operator { symbol:     '-',
                                          precedence: 1,
                                          operation:  Operation::Binary(binary::subtract), };
/// `a * b`
pub const MULTIPLY: Operator = Operator { symbol:     '*',
                                          precedence: 2,
                                          operation:  Operation::Binary(binary::multiply), };
/// `a / b`, failing on a zero divisor.
pub const DIVIDE: Operator = Operator { symbol:     '/',
                                        precedence: 2,
                                        operation:  Operation::Binary(binary::divide), };
/// `a` raised to the power `b`.
pub const EXPONENT: Operator = Operator { symbol:     '^',
                                          precedence: 3,
                                          operation:  Operation::Binary(binary::power), };
/// Square root, written before its operand.
pub const SQUARE_ROOT: Operator = Operator { symbol:     '√',
                                             precedence: 4,
                                             operation:  Operation::Unary(unary::square_root), };
/// `a / 100`, written after its operand.
pub const PERCENTAGE: Operator = Operator { symbol:     '%',
                                            precedence: 4,
                                            operation:  Operation::Unary(unary::percentage), };
/// Factorial, written after its operand.
pub const FACTORIAL: Operator = Operator { symbol:     '!',
                                           precedence: 5,
                                           operation:  Operation::Unary(unary::factorial), };

/// Every operator the calculator understands.
pub const OPERATORS: [Operator; 8] =
    [ADD, SUBTRACT, MULTIPLY, DIVIDE, EXPONENT, SQUARE_ROOT, PERCENTAGE, FACTORIAL];

impl Operator {
    /// Finds the operator for `symbol` in the operator table.
    ///
    /// # Example
    /// ```
    /// use keypad::interpreter::operator::{Arity, Operator};
    ///
    /// let times = Operator::lookup('*').unwrap();
    /// assert_eq!(times.precedence(), 2);
    /// assert_eq!(times.arity(), Arity::Binary);
    ///
    /// assert!(Operator::lookup('&').is_none());
    /// ```
    #[must_use]
    pub fn lookup(symbol: char) -> Option<Self> {
        OPERATORS.iter().find(|operator| operator.symbol == symbol).copied()
    }

    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Higher precedence reduces first.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        self.precedence
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.operation {
            Operation::Unary(_) => Arity::Unary,
            Operation::Binary(_) => Arity::Binary,
        }
    }

    /// Returns `true` for unary operators written after their operand (`!` and
    /// `%`).
    #[must_use]
    pub const fn is_postfix(&self) -> bool {
        matches!(self.symbol, '!' | '%')
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Operator {}
