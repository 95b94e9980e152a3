//! Postfix tokens, exact evaluation and infix rendering

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Operator, PostfixSequence, Token};
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
