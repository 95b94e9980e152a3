use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use super::generator::SkeletonGenerator;
use super::types::Skeleton;

/// Memo table of skeletons keyed by operand count.
///
/// Entries are written once and never invalidated; skeletons depend only on
/// the operand count.
#[derive(Debug, Default)]
pub struct SkeletonCache {
    entries: RwLock<HashMap<usize, Arc<[Skeleton]>>>,
}

impl SkeletonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skeletons for `operands` slots, generating them on first use.
    ///
    /// # Panics
    ///
    /// Panics if `operands` is zero.
    pub fn get(&self, operands: usize) -> Arc<[Skeleton]> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(skeletons) = entries.get(&operands) {
                return Arc::clone(skeletons);
            }
        }

        let generated: Arc<[Skeleton]> = SkeletonGenerator::skeletons_for(operands).into();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let skeletons = entries.entry(operands).or_insert_with(|| {
            debug!(
                "Caching {} skeletons for {} operands",
                generated.len(),
                operands
            );
            generated
        });
        Arc::clone(skeletons)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, operands: usize) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&operands)
    }
}
