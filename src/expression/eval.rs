use log::trace;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::expression::ast::{Operator, PostfixSequence, Token};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// Apply the operator as `left OP right`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by an exact
    /// zero and [`ExpressionError::UnsupportedOperator`] for operators outside
    /// the exact closed set.
    pub fn apply(
        &self,
        left: BigRational,
        right: BigRational,
    ) -> Result<BigRational, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right.is_zero() {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Pow => Err(ExpressionError::UnsupportedOperator(*self)),
        }
    }
}

impl PostfixSequence {
    /// Evaluate the sequence with exact rational arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - the sequence contains an unsupported operator (checked before any arithmetic)
    /// - a subexpression divides by zero
    /// - the token list is not a well-formed postfix expression
    pub fn evaluate(&self) -> Result<BigRational, ExpressionError> {
        if let Some(op) = self.operators().find(|op| !op.is_supported()) {
            trace!("Rejecting {} because of unsupported operator {}", self, op);
            return Err(ExpressionError::UnsupportedOperator(op));
        }

        let mut stack: Vec<BigRational> = Vec::with_capacity(self.len() / 2 + 1);
        for token in self.tokens() {
            match token {
                Token::Operand(value) => {
                    stack.push(BigRational::from_integer(BigInt::from(*value)));
                }
                Token::Operator(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(ExpressionError::StackUnderflow);
                    };
                    stack.push(op.apply(left, right)?);
                }
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(value), true) => {
                trace!("{} evaluated to {}", self, value);
                Ok(value)
            }
            (Some(_), false) => Err(ExpressionError::MalformedSequence {
                remaining: stack.len() + 1,
            }),
            (None, _) => Err(ExpressionError::MalformedSequence { remaining: 0 }),
        }
    }

    /// Exact comparison of the sequence's value against `target`.
    ///
    /// Candidates that cannot be evaluated never match.
    pub fn evaluates_to(&self, target: &BigRational) -> bool {
        matches!(self.evaluate(), Ok(value) if &value == target)
    }
}
