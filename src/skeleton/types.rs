use std::fmt;

/// Kind of a single position in a postfix skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Num,
    Op,
}

/// Operand/operator shape of a postfix expression over N operands.
///
/// A valid skeleton has length `2N - 1`, every non-empty prefix holds more
/// `Num` slots than `Op` slots, and the whole skeleton ends with a surplus of
/// exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Skeleton {
    slots: Vec<Slot>,
}

impl Skeleton {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn operand_count(&self) -> usize {
        self.slots.iter().filter(|slot| **slot == Slot::Num).count()
    }

    pub fn operator_count(&self) -> usize {
        self.slots.len() - self.operand_count()
    }

    /// Operand count minus operator count over the whole skeleton
    pub fn surplus(&self) -> isize {
        self.operand_count() as isize - self.operator_count() as isize
    }

    pub fn satisfies_surplus_invariant(&self) -> bool {
        let mut surplus: isize = 0;
        for slot in &self.slots {
            surplus += match slot {
                Slot::Num => 1,
                Slot::Op => -1,
            };
            if surplus < 1 {
                return false;
            }
        }
        surplus == 1
    }

    pub(crate) fn push(&mut self, slot: Slot) {
        self.slots.push(slot);
    }
}

impl From<&[Slot]> for Skeleton {
    fn from(slots: &[Slot]) -> Self {
        Self::new(slots.to_vec())
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let words: Vec<&str> = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Num => "num",
                Slot::Op => "op",
            })
            .collect();
        write!(f, "{}", words.join(" "))
    }
}
