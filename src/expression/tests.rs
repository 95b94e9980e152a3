use num_bigint::BigInt;
use num_rational::BigRational;

use crate::expression::{ExpressionError, Operator, PostfixSequence, Token};
use Operator::{Add, Div, Mul, Pow, Sub};
use Token::{Operand as N, Operator as O};

fn rational(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

fn seq(tokens: &[Token]) -> PostfixSequence {
    PostfixSequence::new(tokens.to_vec()).unwrap_or_else(|e| panic!("invalid sequence: {e}"))
}

#[test]
fn test_single_operand_evaluates_to_itself() {
    let expr = seq(&[N(7)]);
    assert_eq!(expr.evaluate(), Ok(rational(7, 1)));
    assert_eq!(expr.to_infix(), "7");
}

#[test]
fn test_operand_order_is_left_then_right() {
    let expr = seq(&[N(8), N(2), O(Sub)]);
    assert_eq!(expr.evaluate(), Ok(rational(6, 1)));

    let expr = seq(&[N(8), N(2), O(Div)]);
    assert_eq!(expr.evaluate(), Ok(rational(4, 1)));
}

#[test]
fn test_division_stays_exact() {
    // 8 / (3 - 8 / 3) = 24
    let expr = seq(&[N(8), N(3), N(8), N(3), O(Div), O(Sub), O(Div)]);
    assert_eq!(expr.evaluate(), Ok(rational(24, 1)));
    assert!(expr.evaluates_to(&rational(24, 1)));
}

#[test]
fn test_fractional_result() {
    let expr = seq(&[N(1), N(3), O(Div)]);
    assert_eq!(expr.evaluate(), Ok(rational(1, 3)));
    assert!(!expr.evaluates_to(&rational(0, 1)));
}

#[test]
fn test_division_by_zero_is_reported() {
    let expr = seq(&[N(5), N(0), O(Div)]);
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
    assert!(!expr.evaluates_to(&rational(5, 1)));
}

#[test]
fn test_division_by_zero_subexpression() {
    // 4 / (2 - 2)
    let expr = seq(&[N(4), N(2), N(2), O(Sub), O(Div)]);
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_zero_divided_by_value_is_fine() {
    let expr = seq(&[N(0), N(5), O(Div)]);
    assert_eq!(expr.evaluate(), Ok(rational(0, 1)));
}

#[test]
fn test_pow_is_rejected_not_computed() {
    let expr = seq(&[N(2), N(3), O(Pow), N(1), O(Add)]);
    assert_eq!(
        expr.evaluate(),
        Err(ExpressionError::UnsupportedOperator(Operator::Pow))
    );
    assert!(!expr.evaluates_to(&rational(9, 1)));
}

#[test]
fn test_negative_operands() {
    let expr = seq(&[N(-3), N(4), O(Mul)]);
    assert_eq!(expr.evaluate(), Ok(rational(-12, 1)));
    assert_eq!(expr.to_infix(), "(-3 * 4)");
}

#[test]
fn test_malformed_sequences_are_rejected() {
    assert!(PostfixSequence::new(vec![]).is_err());
    assert!(PostfixSequence::new(vec![N(1), O(Add)]).is_err());
    assert!(PostfixSequence::new(vec![N(1), N(2)]).is_err());
    assert!(PostfixSequence::new(vec![O(Add), N(1), N(2)]).is_err());
}

#[test]
fn test_operator_without_two_values_is_underflow() {
    assert_eq!(
        PostfixSequence::new(vec![N(1), O(Add), N(2)]),
        Err(ExpressionError::StackUnderflow)
    );
    assert_eq!(
        PostfixSequence::new(vec![N(1), N(2)]),
        Err(ExpressionError::MalformedSequence { remaining: 2 })
    );
}

#[test]
fn test_infix_rendering_fully_parenthesizes() {
    let expr = seq(&[N(8), N(4), O(Sub), N(7), N(1), O(Sub), O(Mul)]);
    assert_eq!(expr.to_infix(), "((8 - 4) * (7 - 1))");
    assert_eq!(format!("{}", expr), "((8 - 4) * (7 - 1))");

    let expr = seq(&[N(1), N(2), N(3), N(4), O(Add), O(Add), O(Add)]);
    assert_eq!(expr.to_infix(), "(1 + (2 + (3 + 4)))");
}

#[test]
fn test_postfix_rendering() {
    let expr = seq(&[N(8), N(4), O(Sub), N(7), N(1), O(Sub), O(Mul)]);
    assert_eq!(expr.to_postfix_string(), "8 4 - 7 1 - *");
}

#[test]
fn test_operator_parsing() {
    assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
    assert_eq!("sub".parse::<Operator>(), Ok(Operator::Sub));
    assert_eq!(" MUL ".parse::<Operator>(), Ok(Operator::Mul));
    assert_eq!("truediv".parse::<Operator>(), Ok(Operator::Div));
    assert_eq!("**".parse::<Operator>(), Ok(Operator::Pow));
    assert_eq!(
        "mod".parse::<Operator>(),
        Err(ExpressionError::UnknownOperator("mod".to_string()))
    );
}

#[test]
fn test_operator_symbols_round_trip() {
    for op in [Add, Sub, Mul, Div, Pow] {
        assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        assert_eq!(op.name().parse::<Operator>(), Ok(op));
    }
}
