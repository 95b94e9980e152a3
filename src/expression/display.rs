use std::fmt;

use crate::expression::ast::{PostfixSequence, Token};

impl PostfixSequence {
    /// Render as a fully parenthesized infix string, e.g. `((8 - 4) * (7 - 1))`.
    pub fn to_infix(&self) -> String {
        self.to_string()
    }

    /// Render the raw postfix tokens separated by spaces, e.g. `8 4 - 7 1 - *`.
    pub fn to_postfix_string(&self) -> String {
        self.tokens()
            .iter()
            .map(|token| match token {
                Token::Operand(value) => value.to_string(),
                Token::Operator(op) => op.symbol().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PostfixSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut stack: Vec<String> = Vec::with_capacity(self.len() / 2 + 1);
        for token in self.tokens() {
            match token {
                Token::Operand(value) => stack.push(value.to_string()),
                Token::Operator(op) => {
                    let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                        return Err(fmt::Error);
                    };
                    stack.push(format!("({} {} {})", lhs, op.symbol(), rhs));
                }
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(infix), true) => write!(f, "{}", infix),
            _ => Err(fmt::Error),
        }
    }
}
