use thiserror::Error;

use crate::expression::ast::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Operator '{0}' is not supported by the exact evaluator")]
    UnsupportedOperator(Operator),
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Operator applied with fewer than two values on the stack")]
    StackUnderflow,
    #[error("Postfix sequence does not reduce to a single value ({remaining} left)")]
    MalformedSequence { remaining: usize },
}
