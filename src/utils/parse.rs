use log::debug;
use num_rational::BigRational;

use crate::expression::Operator;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `input` is not a base-10 integer that fits in an `i64`.
pub fn parse_operand(input: &str) -> Result<i64, UtilsError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| UtilsError::InvalidOperand(input.trim().to_string()))
}

/// Parse a target such as `24`, `-3` or `7/2`.
///
/// # Errors
///
/// Returns an error for anything else, including a zero denominator.
pub fn parse_target(input: &str) -> Result<BigRational, UtilsError> {
    let trimmed = input.trim();
    let target = trimmed
        .parse::<BigRational>()
        .map_err(|_| UtilsError::InvalidTarget(trimmed.to_string()))?;
    debug!("Parsed target '{}' as {}", trimmed, target);
    Ok(target)
}

/// Parse a comma or whitespace separated operator list such as `+,-,*,/` or
/// `add mul`. Repeated operators are kept once, in first-seen order.
///
/// # Errors
///
/// Returns an error for unknown operator names or an empty list.
pub fn parse_operator_set(input: &str) -> Result<Vec<Operator>, UtilsError> {
    let mut operators: Vec<Operator> = Vec::new();
    for word in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
    {
        let op = word
            .parse::<Operator>()
            .map_err(|_| UtilsError::UnknownOperator(word.to_string()))?;
        if !operators.contains(&op) {
            operators.push(op);
        }
    }

    if operators.is_empty() {
        return Err(UtilsError::EmptyOperatorSet);
    }

    debug!("Parsed operator set: {:?}", operators);
    Ok(operators)
}
