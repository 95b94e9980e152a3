use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use num_rational::BigRational;
use rayon::prelude::*;

use crate::expression::{Operator, PostfixSequence};
use crate::iterator::{CartesianProduct, DistinctPermutations};
use crate::skeleton::{Skeleton, SkeletonCache, catalan};
use crate::solver::assemble::assemble;
use crate::solver::request::{SearchMode, SearchRequest};

/// Upper bound on candidates for `operands` operands and `operators`
/// operators: `N! * M^(N-1) * Catalan(N-1)`. `None` if it overflows.
pub fn candidate_bound(operands: usize, operators: usize) -> Option<u128> {
    if operands == 0 {
        return Some(0);
    }
    let mut factorial: u128 = 1;
    for k in 2..=operands as u128 {
        factorial = factorial.checked_mul(k)?;
    }
    let exponent = u32::try_from(operands - 1).ok()?;
    let tuples = (operators as u128).checked_pow(exponent)?;
    factorial
        .checked_mul(tuples)?
        .checked_mul(catalan(operands - 1)?)
}

/// Lazy stream of solutions for one search request.
///
/// Loops over operand permutations, then operator tuples, then skeletons.
/// In first-match mode the stream ends right after the first solution and no
/// further candidate is built.
pub struct Solutions<'a, P = DistinctPermutations<i64>> {
    target: &'a BigRational,
    mode: SearchMode,
    operators: &'a [Operator],
    operator_slots: usize,
    skeletons: Arc<[Skeleton]>,
    permutations: P,
    permutation: Option<Vec<i64>>,
    operator_tuples: CartesianProduct<Operator>,
    operator_tuple: Option<Vec<Operator>>,
    skeleton_index: usize,
    evaluated: u64,
    finished: bool,
}

impl<'a, P> Solutions<'a, P>
where
    P: Iterator<Item = Vec<i64>>,
{
    fn new(
        request: &'a SearchRequest,
        operators: &'a [Operator],
        skeletons: Arc<[Skeleton]>,
        permutations: P,
    ) -> Self {
        let operator_slots = request.operand_count().saturating_sub(1);
        Self {
            target: request.target(),
            mode: request.mode(),
            operators,
            operator_slots,
            skeletons,
            permutations,
            permutation: None,
            operator_tuples: CartesianProduct::new(operators, operator_slots),
            operator_tuple: None,
            skeleton_index: 0,
            evaluated: 0,
            finished: false,
        }
    }

    /// Number of candidates assembled and evaluated so far
    pub fn candidates_evaluated(&self) -> u64 {
        self.evaluated
    }
}

impl<P> Iterator for Solutions<'_, P>
where
    P: Iterator<Item = Vec<i64>>,
{
    type Item = PostfixSequence;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if self.permutation.is_none() {
                match self.permutations.next() {
                    Some(permutation) => {
                        self.permutation = Some(permutation);
                        self.operator_tuples =
                            CartesianProduct::new(self.operators, self.operator_slots);
                        self.operator_tuple = None;
                    }
                    None => self.finished = true,
                }
                continue;
            }

            if self.operator_tuple.is_none() {
                match self.operator_tuples.next() {
                    Some(tuple) => {
                        self.operator_tuple = Some(tuple);
                        self.skeleton_index = 0;
                    }
                    None => self.permutation = None,
                }
                continue;
            }

            let (Some(permutation), Some(tuple), Some(skeleton)) = (
                self.permutation.as_deref(),
                self.operator_tuple.as_deref(),
                self.skeletons.get(self.skeleton_index),
            ) else {
                self.operator_tuple = None;
                continue;
            };

            let candidate = assemble(permutation, tuple, skeleton);
            self.skeleton_index += 1;
            self.evaluated += 1;

            if candidate.evaluates_to(self.target) {
                if self.mode == SearchMode::FirstMatch {
                    self.finished = true;
                }
                return Some(candidate);
            }
        }
    }
}

/// Result of a completed search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    solutions: Vec<PostfixSequence>,
    sorted_operands: Vec<i64>,
    mode: SearchMode,
    candidates_evaluated: u64,
}

impl SearchOutcome {
    pub fn solutions(&self) -> &[PostfixSequence] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<PostfixSequence> {
        self.solutions
    }

    pub fn count(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn first(&self) -> Option<&PostfixSequence> {
        self.solutions.first()
    }

    /// The input multiset in ascending order, for echoing back to the user
    pub fn sorted_operands(&self) -> &[i64] {
        &self.sorted_operands
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn candidates_evaluated(&self) -> u64 {
        self.candidates_evaluated
    }

    pub fn infix_strings(&self) -> Vec<String> {
        self.solutions.iter().map(PostfixSequence::to_infix).collect()
    }

    /// e.g. `3 solution(s) for [1, 2, 3]`
    pub fn summary(&self) -> String {
        format!(
            "{} solution(s) for {:?}",
            self.solutions.len(),
            self.sorted_operands
        )
    }
}

/// Search context: the configured operator set and the skeleton memo table
#[derive(Debug)]
pub struct Solver {
    skeletons: SkeletonCache,
    operators: Vec<Operator>,
}

impl Solver {
    /// Solver over `+ - * /`
    pub fn new() -> Self {
        Self::with_operators(Operator::BASIC.to_vec())
    }

    /// Solver over `operators`; repeats are kept once, in first-seen order
    pub fn with_operators(operators: Vec<Operator>) -> Self {
        let mut unique: Vec<Operator> = Vec::with_capacity(operators.len());
        for op in operators {
            if !unique.contains(&op) {
                unique.push(op);
            }
        }
        let operators = unique;

        for op in operators.iter().filter(|op| !op.is_supported()) {
            warn!(
                "Operator '{}' is not evaluated exactly; candidates using it will be rejected",
                op
            );
        }
        Self {
            skeletons: SkeletonCache::new(),
            operators,
        }
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn skeleton_cache(&self) -> &SkeletonCache {
        &self.skeletons
    }

    /// Lazily enumerate the solutions of `request`
    pub fn solutions<'a>(&'a self, request: &'a SearchRequest) -> Solutions<'a> {
        self.solutions_over(request, DistinctPermutations::new(request.operands()))
    }

    fn solutions_over<'a, P>(
        &'a self,
        request: &'a SearchRequest,
        permutations: P,
    ) -> Solutions<'a, P>
    where
        P: Iterator<Item = Vec<i64>>,
    {
        let skeletons = self.skeletons.get(request.operand_count());
        debug!(
            "Searching with {} skeletons and {} operators",
            skeletons.len(),
            self.operators.len()
        );
        Solutions::new(request, &self.operators, skeletons, permutations)
    }

    fn log_start(&self, request: &SearchRequest) {
        let bound = candidate_bound(request.operand_count(), self.operators.len());
        info!(
            "Searching {:?} for {} in {:?} mode (at most {} candidates)",
            request.operands(),
            request.target(),
            request.mode(),
            bound.map_or_else(|| "too many".to_string(), |b| b.to_string())
        );
    }

    /// Run `request` to completion on the current thread
    pub fn solve(&self, request: &SearchRequest) -> SearchOutcome {
        self.log_start(request);

        let mut stream = self.solutions(request);
        let solutions: Vec<PostfixSequence> = stream.by_ref().collect();
        let candidates_evaluated = stream.candidates_evaluated();

        info!(
            "Found {} solution(s) after {} candidates",
            solutions.len(),
            candidates_evaluated
        );
        SearchOutcome {
            solutions,
            sorted_operands: request.sorted_operands(),
            mode: request.mode(),
            candidates_evaluated,
        }
    }

    /// Run `request` with the permutation loop split across the rayon pool.
    ///
    /// Exhaustive results come back in the same order as [`Solver::solve`];
    /// first-match returns whichever solution a worker finds first.
    pub fn solve_parallel(&self, request: &SearchRequest) -> SearchOutcome {
        self.log_start(request);

        // fill the cache before workers start reading it
        self.skeletons.get(request.operand_count());
        let permutations: Vec<Vec<i64>> = DistinctPermutations::new(request.operands()).collect();
        let evaluated = AtomicU64::new(0);

        let solutions: Vec<PostfixSequence> = match request.mode() {
            SearchMode::FirstMatch => permutations
                .into_par_iter()
                .find_map_any(|permutation| {
                    let mut stream = self.solutions_over(request, std::iter::once(permutation));
                    let found = stream.next();
                    evaluated.fetch_add(stream.candidates_evaluated(), Ordering::Relaxed);
                    found
                })
                .into_iter()
                .collect(),
            SearchMode::Exhaustive => permutations
                .into_par_iter()
                .map(|permutation| {
                    let mut stream = self.solutions_over(request, std::iter::once(permutation));
                    let found: Vec<PostfixSequence> = stream.by_ref().collect();
                    evaluated.fetch_add(stream.candidates_evaluated(), Ordering::Relaxed);
                    found
                })
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect(),
        };

        let candidates_evaluated = evaluated.into_inner();
        info!(
            "Found {} solution(s) after {} candidates",
            solutions.len(),
            candidates_evaluated
        );
        SearchOutcome {
            solutions,
            sorted_operands: request.sorted_operands(),
            mode: request.mode(),
            candidates_evaluated,
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
