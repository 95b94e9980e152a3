use num_bigint::BigInt;
use num_rational::BigRational;

use crate::solver::errors::SolverError;
use crate::utils::validate_operands;

/// Whether a search collects every solution or stops at the first one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Exhaustive,
    FirstMatch,
}

/// One batch of operands to combine into the target value
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    operands: Vec<i64>,
    target: BigRational,
    mode: SearchMode,
}

impl SearchRequest {
    /// # Errors
    ///
    /// Returns an error if `operands` is empty.
    pub fn new(
        operands: Vec<i64>,
        target: BigRational,
        mode: SearchMode,
    ) -> Result<Self, SolverError> {
        validate_operands(&operands)?;
        Ok(Self {
            operands,
            target,
            mode,
        })
    }

    /// # Errors
    ///
    /// Returns an error if `operands` is empty.
    pub fn with_integer_target(
        operands: Vec<i64>,
        target: i64,
        mode: SearchMode,
    ) -> Result<Self, SolverError> {
        Self::new(
            operands,
            BigRational::from_integer(BigInt::from(target)),
            mode,
        )
    }

    pub fn operands(&self) -> &[i64] {
        &self.operands
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn target(&self) -> &BigRational {
        &self.target
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn sorted_operands(&self) -> Vec<i64> {
        let mut sorted = self.operands.clone();
        sorted.sort_unstable();
        sorted
    }
}
