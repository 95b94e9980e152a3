//! Postfix skeletons: every parenthesization of N operands as a slot pattern

mod cache;
pub mod constants;
mod generator;
mod types;

pub use cache::SkeletonCache;
pub use generator::{SkeletonGenerator, catalan};
pub use types::{Skeleton, Slot};
