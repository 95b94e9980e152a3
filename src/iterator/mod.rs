//! Permutation and cartesian-product sources consumed by the search

mod permutations;
mod product;

pub use permutations::DistinctPermutations;
pub use product::CartesianProduct;
