mod assemble;
pub mod constants;
mod core;
mod errors;
mod request;

pub use assemble::assemble;
pub use self::core::{SearchOutcome, Solutions, Solver, candidate_bound};
pub use errors::SolverError;
pub use request::{SearchMode, SearchRequest};

#[cfg(test)]
mod tests;
