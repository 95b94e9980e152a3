//! Input validation and parsing helpers

mod errors;
mod parse;
mod validation;

pub use errors::UtilsError;
pub use parse::{parse_operand, parse_operator_set, parse_target};
pub use validation::validate_operands;
