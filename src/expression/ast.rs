use std::fmt;
use std::str::FromStr;

use crate::expression::errors::ExpressionError;

/// Binary operators that can fill an operator slot of a skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// The operator set of the classic 24 game, in enumeration order
    pub const BASIC: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Pow => "pow",
        }
    }

    /// Whether the evaluator computes this operator exactly.
    ///
    /// Exponentiation can blow intermediate values up without bound and may
    /// leave the rationals, so it is rejected rather than computed.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Operator::Pow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" => Ok(Operator::Sub),
            "*" | "x" | "mul" => Ok(Operator::Mul),
            "/" | "div" | "truediv" => Ok(Operator::Div),
            "^" | "**" | "pow" => Ok(Operator::Pow),
            other => Err(ExpressionError::UnknownOperator(other.to_string())),
        }
    }
}

/// A single postfix token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(i64),
    Operator(Operator),
}

/// A fully instantiated postfix (reverse Polish) expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostfixSequence {
    tokens: Vec<Token>,
}

impl PostfixSequence {
    /// Build a sequence from arbitrary tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::StackUnderflow`] if some prefix applies an
    /// operator without two values available, and
    /// [`ExpressionError::MalformedSequence`] if the whole sequence does not
    /// reduce to exactly one value.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ExpressionError> {
        let mut surplus: i64 = 0;
        for token in &tokens {
            surplus += match token {
                Token::Operand(_) => 1,
                Token::Operator(_) => -1,
            };
            if surplus < 1 {
                return Err(ExpressionError::StackUnderflow);
            }
        }
        if surplus != 1 {
            return Err(ExpressionError::MalformedSequence {
                remaining: usize::try_from(surplus).unwrap_or(0),
            });
        }
        Ok(Self { tokens })
    }

    /// Skips validation; callers build `tokens` from a valid skeleton.
    pub(crate) fn from_tokens_unchecked(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn operands(&self) -> impl Iterator<Item = i64> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            Token::Operand(value) => Some(*value),
            Token::Operator(_) => None,
        })
    }

    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            Token::Operator(op) => Some(*op),
            Token::Operand(_) => None,
        })
    }
}
