// Precomputed skeletons for small operand counts, in lexicographic order
use super::types::Slot::{self, Num, Op};

pub const PRECOMPUTED_MAX_OPERANDS: usize = 4;

static ONE: [&[Slot]; 1] = [&[Num]];

static TWO: [&[Slot]; 1] = [&[Num, Num, Op]];

static THREE: [&[Slot]; 2] = [&[Num, Num, Num, Op, Op], &[Num, Num, Op, Num, Op]];

static FOUR: [&[Slot]; 5] = [
    &[Num, Num, Num, Num, Op, Op, Op],
    &[Num, Num, Num, Op, Num, Op, Op],
    &[Num, Num, Num, Op, Op, Num, Op],
    &[Num, Num, Op, Num, Num, Op, Op],
    &[Num, Num, Op, Num, Op, Num, Op],
];

pub fn precomputed(operands: usize) -> Option<&'static [&'static [Slot]]> {
    match operands {
        1 => Some(ONE.as_slice()),
        2 => Some(TWO.as_slice()),
        3 => Some(THREE.as_slice()),
        4 => Some(FOUR.as_slice()),
        _ => None,
    }
}
