use crate::expression::{Operator, PostfixSequence, Token};
use crate::skeleton::{Skeleton, Slot};

/// Fill `skeleton` with operands and operators, each consumed left to right.
///
/// # Panics
///
/// Panics unless `skeleton` satisfies the operand-surplus invariant,
/// `operands` matches its `Num` slots and `operators` its `Op` slots.
pub fn assemble(operands: &[i64], operators: &[Operator], skeleton: &Skeleton) -> PostfixSequence {
    assert!(
        skeleton.satisfies_surplus_invariant(),
        "skeleton {} is not a valid postfix shape",
        skeleton
    );
    assert_eq!(
        operands.len() + operators.len(),
        skeleton.len(),
        "operands and operators must exactly fill the skeleton"
    );
    assert_eq!(
        operands.len(),
        skeleton.operand_count(),
        "operand count must match the skeleton's num slots"
    );

    let mut next_operand = operands.iter();
    let mut next_operator = operators.iter();
    let tokens = skeleton
        .slots()
        .iter()
        .filter_map(|slot| match slot {
            Slot::Num => next_operand.next().map(|value| Token::Operand(*value)),
            Slot::Op => next_operator.next().map(|op| Token::Operator(*op)),
        })
        .collect();

    PostfixSequence::from_tokens_unchecked(tokens)
}
