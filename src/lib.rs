//! solve24 - find every arithmetic expression over a multiset of integers that
//! reaches a target value
//!
//! The search crosses every distinct permutation of the operands with every
//! operator tuple and every postfix skeleton (one per parenthesization), and
//! evaluates each candidate with exact rational arithmetic.

pub mod expression;
pub mod iterator;
pub mod skeleton;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, Operator, PostfixSequence, Token};
pub use skeleton::{Skeleton, SkeletonCache, SkeletonGenerator, Slot};
pub use solver::{SearchMode, SearchOutcome, SearchRequest, Solver, SolverError};
pub use utils::{UtilsError, parse_target, validate_operands};

/// Every way to reach `target` from `numbers` with `+ - * /`, as infix strings
///
/// # Errors
///
/// Returns an error if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use solve24::solve24;
///
/// let solutions = solve24(&[2, 2], 4).unwrap_or_default();
/// assert_eq!(solutions, vec!["(2 + 2)", "(2 * 2)"]);
/// ```
pub fn solve24(numbers: &[i64], target: i64) -> Result<Vec<String>, SolverError> {
    let request =
        SearchRequest::with_integer_target(numbers.to_vec(), target, SearchMode::Exhaustive)?;
    Ok(Solver::new().solve(&request).infix_strings())
}

/// The first expression reaching `target` from `numbers`, if any
///
/// # Errors
///
/// Returns an error if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use solve24::find_expression;
///
/// match find_expression(&[4, 1, 8, 7], 24) {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(numbers: &[i64], target: i64) -> Result<Option<String>, SolverError> {
    let request =
        SearchRequest::with_integer_target(numbers.to_vec(), target, SearchMode::FirstMatch)?;
    Ok(Solver::new().solve(&request).first().map(PostfixSequence::to_infix))
}
