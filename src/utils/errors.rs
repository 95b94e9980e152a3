use thiserror::Error;

/// Errors that can occur while validating or parsing search input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one operand is required")]
    EmptyOperands,
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
    #[error("Invalid target (expected an integer or a/b fraction): {0}")]
    InvalidTarget(String),
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Operator set cannot be empty")]
    EmptyOperatorSet,
}
