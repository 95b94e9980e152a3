use log::debug;

use super::constants::precomputed;
use super::types::{Skeleton, Slot};

/// A skeleton under construction together with its slot counts
#[derive(Debug, Clone)]
struct Partial {
    skeleton: Skeleton,
    operands: usize,
    operators: usize,
}

impl Partial {
    fn empty() -> Self {
        Self {
            skeleton: Skeleton::new(Vec::new()),
            operands: 0,
            operators: 0,
        }
    }

    fn extended(&self, slot: Slot) -> Self {
        let mut next = self.clone();
        next.skeleton.push(slot);
        match slot {
            Slot::Num => next.operands += 1,
            Slot::Op => next.operators += 1,
        }
        next
    }

    fn surplus(&self) -> usize {
        self.operands - self.operators
    }
}

pub struct SkeletonGenerator;

impl SkeletonGenerator {
    /// All skeletons for `operands` slots, from the static tables when available.
    ///
    /// # Panics
    ///
    /// Panics if `operands` is zero.
    pub fn skeletons_for(operands: usize) -> Vec<Skeleton> {
        match precomputed(operands) {
            Some(table) => table.iter().map(|slots| Skeleton::from(*slots)).collect(),
            None => Self::generate(operands),
        }
    }

    /// Generate every valid skeleton for `operands` slots.
    ///
    /// Works round by round: each round maps every partial skeleton into one
    /// or two partials one slot longer, until all reach length `2n - 1`.
    /// Children stay adjacent with `Num` before `Op`, so the result comes out
    /// in lexicographic order.
    ///
    /// # Panics
    ///
    /// Panics if `operands` is zero.
    pub fn generate(operands: usize) -> Vec<Skeleton> {
        assert!(operands > 0, "a skeleton needs at least one operand");

        let length = 2 * operands - 1;
        let mut round = vec![Partial::empty()];

        for _ in 0..length {
            let mut next = Vec::with_capacity(round.len() * 2);
            for partial in &round {
                if partial.operands == operands {
                    next.push(partial.extended(Slot::Op));
                } else if partial.surplus() > 1 {
                    next.push(partial.extended(Slot::Num));
                    next.push(partial.extended(Slot::Op));
                } else {
                    next.push(partial.extended(Slot::Num));
                }
            }
            round = next;
        }

        debug!(
            "Generated {} skeletons for {} operands",
            round.len(),
            operands
        );
        round.into_iter().map(|partial| partial.skeleton).collect()
    }
}

/// The n-th Catalan number, `None` on overflow.
pub fn catalan(n: usize) -> Option<u128> {
    let mut value: u128 = 1;
    for k in 0..n {
        let k = k as u128;
        value = value.checked_mul(2 * (2 * k + 1))? / (k + 2);
    }
    Some(value)
}
