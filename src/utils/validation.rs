use log::{debug, warn};

use crate::solver::constants::PRACTICAL_OPERAND_LIMIT;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if no operands were supplied.
pub fn validate_operands(operands: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating operands: {:?}", operands);

    if operands.is_empty() {
        warn!("Operand list is empty");
        return Err(UtilsError::EmptyOperands);
    }

    if operands.len() > PRACTICAL_OPERAND_LIMIT {
        warn!(
            "{} operands requested; the search grows factorially and is impractical beyond {}",
            operands.len(),
            PRACTICAL_OPERAND_LIMIT
        );
    }

    Ok(())
}
