use keypad::{calculate, error::EvaluationError, evaluate_expression};

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_error(src: &str, expected: &EvaluationError) {
    match evaluate_expression(src) {
        Ok(value) => panic!("Expression {src} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "wrong error for {src}"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)*5", 70.0);
    assert_value("((1+2))", 3.0);
    assert_value("10-4-3", 3.0);
    assert_value("100/10/5", 2.0);
    assert_value("2+3^2*2", 20.0);
}

#[test]
fn exponent_reduces_left_to_right() {
    assert_value("2^3^2", 64.0);
    assert_value("2^(3^2)", 512.0);
}

#[test]
fn unary_operators() {
    assert_value("√9", 3.0);
    assert_value("9%", 0.09);
    assert_value("5!", 120.0);
    assert_value("0!", 1.0);
    assert_value("√(7+9)", 4.0);
    assert_value("2+√9", 5.0);
    assert_value("√9+1", 4.0);
    assert_value("50*10%", 5.0);
    assert_value("3!!", 720.0);
    assert_value("(2+1)!", 6.0);
}

#[test]
fn factorial_binds_tighter_than_exponent() {
    assert_value("2^3!", 64.0);
}

#[test]
fn square_root_of_negative_is_nan() {
    let value = evaluate_expression("√(0-4)").unwrap();
    assert!(value.is_nan());
}

#[test]
fn decimals() {
    assert_value("1.5+2.25", 3.75);
    assert_value(".5*4", 2.0);
    assert_value("5.", 5.0);
}

#[test]
fn signed_literals() {
    assert_value("-5+2", -3.0);
    assert_value("2*-3", -6.0);
    assert_value("(-2)^2", 4.0);
    assert_value("2--3", 5.0);
    assert_value("5!-3", 117.0);
    assert_error("(-1)!", &EvaluationError::NegativeFactorial { value: -1.0 });
}

#[test]
fn plus_is_never_a_sign() {
    assert_error("+2", &EvaluationError::EmptyOperandStack { operator: '+' });
    assert_error("2*+3", &EvaluationError::EmptyOperandStack { operator: '*' });
}

#[test]
fn arithmetic_domain_errors() {
    assert_error("5/0", &EvaluationError::DivisionByZero);
    assert_error("5/(2-2)", &EvaluationError::DivisionByZero);
    assert_error("3.5!", &EvaluationError::NonIntegerFactorial { value: 3.5 });
}

#[test]
fn unbalanced_parentheses() {
    assert_error("(2+3", &EvaluationError::UnbalancedParenthesis);
    assert_error("2+3)", &EvaluationError::UnbalancedParenthesis);
    assert_error(")", &EvaluationError::UnbalancedParenthesis);
}

#[test]
fn malformed_expressions() {
    assert_error("", &EvaluationError::MalformedExpression { remaining: 0 });
    assert_error("()", &EvaluationError::MalformedExpression { remaining: 0 });
    assert_error("(2)(3)", &EvaluationError::MalformedExpression { remaining: 2 });
    assert_error("2+", &EvaluationError::EmptyOperandStack { operator: '+' });
}

#[test]
fn lexing_errors() {
    assert_error("2&3",
                 &EvaluationError::InvalidCharacter { character: '&',
                                                      position:  1, });
    assert_error("2 + 3",
                 &EvaluationError::InvalidCharacter { character: ' ',
                                                      position:  1, });
    assert_error("√x",
                 &EvaluationError::InvalidCharacter { character: 'x',
                                                      position:  3, });
    assert_error("1+1.2.3",
                 &EvaluationError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                     position: 2, });
    assert_error(".", &EvaluationError::MalformedNumber { literal:  ".".to_string(),
                                                          position: 0, });
}

#[test]
fn formatted_results() {
    assert_eq!(calculate("2+2"), "4");
    assert_eq!(calculate("9/2"), "4.5");
    assert_eq!(calculate("0.1+0.2"), "0.30000000000000004");
    assert_eq!(calculate("2-5"), "-3");
    assert_eq!(calculate("171!"), "Infinity");
    assert_eq!(calculate("2&3"), "ERROR");
    assert_eq!(calculate("(1"), "ERROR");
}
