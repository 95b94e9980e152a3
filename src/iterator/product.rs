/// Cartesian product of `items` with itself `repeat` times.
///
/// Tuples come out in odometer order: the last position varies fastest.
/// A `repeat` of zero yields a single empty tuple.
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone> CartesianProduct<T> {
    pub fn new(items: &[T], repeat: usize) -> Self {
        Self {
            items: items.to_vec(),
            indices: vec![0; repeat],
            exhausted: items.is_empty() && repeat > 0,
        }
    }

    /// Step the odometer; false once it wraps around.
    fn advance(&mut self) -> bool {
        let base = self.items.len();
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < base {
                return true;
            }
            *index = 0;
        }
        false
    }
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let tuple = self
            .indices
            .iter()
            .filter_map(|&index| self.items.get(index).cloned())
            .collect();
        if !self.advance() {
            self.exhausted = true;
        }
        Some(tuple)
    }
}
