/// Distinct permutations of a multiset in lexicographic order.
///
/// Value-identical permutations (from repeated elements) are yielded once.
#[derive(Debug, Clone)]
pub struct DistinctPermutations<T> {
    current: Vec<T>,
    exhausted: bool,
}

impl<T: Ord + Clone> DistinctPermutations<T> {
    pub fn new(items: &[T]) -> Self {
        let mut current = items.to_vec();
        current.sort();
        Self {
            current,
            exhausted: false,
        }
    }

    /// Rearrange `current` into its lexicographic successor.
    ///
    /// Returns false when `current` is already the last permutation.
    fn advance(&mut self) -> bool {
        let len = self.current.len();
        if len < 2 {
            return false;
        }

        let mut pivot = len - 1;
        while pivot > 0 && self.current[pivot - 1] >= self.current[pivot] {
            pivot -= 1;
        }
        if pivot == 0 {
            return false;
        }

        let mut successor = len - 1;
        while self.current[successor] <= self.current[pivot - 1] {
            successor -= 1;
        }
        self.current.swap(pivot - 1, successor);
        self.current[pivot..].reverse();
        true
    }
}

impl<T: Ord + Clone> Iterator for DistinctPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.current.clone();
        if !self.advance() {
            self.exhausted = true;
        }
        Some(item)
    }
}
