use std::collections::HashSet;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::expression::{Operator, PostfixSequence};
use crate::skeleton::{Skeleton, SkeletonGenerator, Slot};
use crate::solver::{SearchMode, SearchRequest, Solver, SolverError, assemble, candidate_bound};
use crate::utils::UtilsError;

fn request(operands: &[i64], target: i64, mode: SearchMode) -> SearchRequest {
    SearchRequest::with_integer_target(operands.to_vec(), target, mode)
        .unwrap_or_else(|e| panic!("invalid request: {e}"))
}

fn infix_set(solutions: &[PostfixSequence]) -> HashSet<String> {
    solutions.iter().map(PostfixSequence::to_infix).collect()
}

#[test]
fn test_assemble_follows_skeleton_order() {
    let skeletons = SkeletonGenerator::generate(4);
    let ops = [Operator::Sub, Operator::Sub, Operator::Mul];

    let chained = assemble(&[8, 4, 7, 1], &ops, &skeletons[0]);
    assert_eq!(chained.to_postfix_string(), "8 4 7 1 - - *");

    let paired = assemble(&[8, 4, 7, 1], &ops, &skeletons[3]);
    assert_eq!(paired.to_postfix_string(), "8 4 - 7 1 - *");
    assert_eq!(paired.to_infix(), "((8 - 4) * (7 - 1))");
}

#[test]
fn test_assemble_single_operand() {
    let skeletons = SkeletonGenerator::generate(1);
    let expr = assemble(&[5], &[], &skeletons[0]);
    assert_eq!(expr.to_infix(), "5");
}

#[test]
#[should_panic]
fn test_assemble_rejects_length_mismatch() {
    let skeletons = SkeletonGenerator::generate(3);
    assemble(&[1, 2], &[Operator::Add], &skeletons[0]);
}

#[test]
#[should_panic(expected = "not a valid postfix shape")]
fn test_assemble_rejects_skeleton_without_operand_surplus() {
    let skeleton = Skeleton::new(vec![Slot::Num, Slot::Op, Slot::Num]);
    assemble(&[1, 2], &[Operator::Add], &skeleton);
}

#[test]
fn test_four_one_eight_seven_makes_24() {
    let solver = Solver::new();
    let outcome = solver.solve(&request(&[4, 1, 8, 7], 24, SearchMode::Exhaustive));
    assert!(!outcome.is_empty());

    let target = BigRational::from_integer(BigInt::from(24));
    for solution in outcome.solutions() {
        assert_eq!(solution.evaluate(), Ok(target.clone()));
    }
    assert!(infix_set(outcome.solutions()).contains("((8 - 4) * (7 - 1))"));
    assert_eq!(outcome.sorted_operands(), &[1, 4, 7, 8]);
}

#[test]
fn test_four_ones_never_make_24() {
    let solver = Solver::new();
    let outcome = solver.solve(&request(&[1, 1, 1, 1], 24, SearchMode::Exhaustive));
    assert_eq!(outcome.count(), 0);
    assert_eq!(outcome.summary(), "0 solution(s) for [1, 1, 1, 1]");
    // one distinct permutation, 4^3 operator tuples, 5 skeletons
    assert_eq!(outcome.candidates_evaluated(), 320);
}

#[test]
fn test_two_twos_make_four_two_ways() {
    let solver = Solver::new();
    let outcome = solver.solve(&request(&[2, 2], 4, SearchMode::Exhaustive));
    assert_eq!(outcome.infix_strings(), vec!["(2 + 2)", "(2 * 2)"]);
    assert_eq!(outcome.candidates_evaluated(), 4);
}

#[test]
fn test_division_by_zero_is_skipped() {
    let solver = Solver::new();

    let outcome = solver.solve(&request(&[0, 5], 5, SearchMode::Exhaustive));
    let found = infix_set(outcome.solutions());
    assert!(found.contains("(0 + 5)"));
    assert!(found.contains("(5 + 0)"));
    assert!(found.contains("(5 - 0)"));
    assert!(!found.iter().any(|s| s.contains("/ 0")));

    let outcome = solver.solve(&request(&[0, 5], 0, SearchMode::Exhaustive));
    let found = infix_set(outcome.solutions());
    assert!(found.contains("(0 / 5)"));
    assert!(found.contains("(0 * 5)"));
    assert!(!found.contains("(5 / 0)"));
    // 2 permutations * 4 operators, including the skipped 5 / 0
    assert_eq!(outcome.candidates_evaluated(), 8);
}

#[test]
fn test_commutative_duplicates_are_reported() {
    let solver = Solver::new();
    let outcome = solver.solve(&request(&[1, 2], 3, SearchMode::Exhaustive));
    assert_eq!(outcome.infix_strings(), vec!["(1 + 2)", "(2 + 1)"]);
}

#[test]
fn test_single_operand_request() {
    let solver = Solver::new();
    let outcome = solver.solve(&request(&[24], 24, SearchMode::Exhaustive));
    assert_eq!(outcome.infix_strings(), vec!["24"]);

    let outcome = solver.solve(&request(&[7], 24, SearchMode::Exhaustive));
    assert!(outcome.is_empty());
}

#[test]
fn test_rational_target() {
    let solver = Solver::new();
    let target = BigRational::new(BigInt::from(1), BigInt::from(3));
    let request = SearchRequest::new(vec![1, 3], target, SearchMode::Exhaustive);
    assert!(request.is_ok());
    if let Ok(request) = request {
        let outcome = solver.solve(&request);
        assert_eq!(outcome.infix_strings(), vec!["(1 / 3)"]);
    }
}

#[test]
fn test_exact_arithmetic_finds_classic_fraction_solution() {
    let solver = Solver::new();
    let outcome = solver.solve(&request(&[3, 3, 8, 8], 24, SearchMode::Exhaustive));
    assert!(infix_set(outcome.solutions()).contains("(8 / (3 - (8 / 3)))"));
}

#[test]
fn test_first_match_stops_after_first_solution() {
    let solver = Solver::new();
    let quick = solver.solve(&request(&[2, 2], 4, SearchMode::FirstMatch));
    assert_eq!(quick.infix_strings(), vec!["(2 + 2)"]);
    assert_eq!(quick.candidates_evaluated(), 1);
}

#[test]
fn test_first_match_is_subset_of_exhaustive() {
    let solver = Solver::new();
    for operands in [[4, 1, 8, 7], [3, 3, 8, 8], [1, 5, 5, 5], [6, 6, 6, 6]] {
        let full = solver.solve(&request(&operands, 24, SearchMode::Exhaustive));
        let quick = solver.solve(&request(&operands, 24, SearchMode::FirstMatch));

        assert!(quick.candidates_evaluated() <= full.candidates_evaluated());
        assert!(quick.count() <= 1);
        assert_eq!(quick.is_empty(), full.is_empty());
        if let Some(first) = quick.first() {
            assert!(full.solutions().contains(first));
            assert_eq!(full.first(), Some(first));
        }
    }
}

#[test]
fn test_first_match_without_solution_evaluates_everything() {
    let solver = Solver::new();
    let quick = solver.solve(&request(&[1, 1, 1, 1], 24, SearchMode::FirstMatch));
    let full = solver.solve(&request(&[1, 1, 1, 1], 24, SearchMode::Exhaustive));
    assert!(quick.is_empty());
    assert_eq!(quick.candidates_evaluated(), full.candidates_evaluated());
}

#[test]
fn test_solutions_stream_is_lazy() {
    let solver = Solver::new();
    let request = request(&[4, 1, 8, 7], 24, SearchMode::Exhaustive);
    let mut stream = solver.solutions(&request);
    assert_eq!(stream.candidates_evaluated(), 0);

    let first = stream.next();
    assert!(first.is_some());
    let after_first = stream.candidates_evaluated();
    assert!(after_first > 0);
    assert!(after_first < 24 * 64 * 5);
}

#[test]
fn test_exhaustive_search_is_repeatable() {
    let solver = Solver::new();
    let request = request(&[1, 2, 3, 4], 10, SearchMode::Exhaustive);
    let first = solver.solve(&request);
    let second = solver.solve(&request);
    assert_eq!(first, second);
    assert_eq!(first.candidates_evaluated(), 24 * 64 * 5);
}

#[test]
fn test_parallel_matches_sequential() {
    let solver = Solver::new();
    let request = request(&[4, 1, 8, 7], 24, SearchMode::Exhaustive);
    let sequential = solver.solve(&request);
    let parallel = solver.solve_parallel(&request);
    assert_eq!(sequential.solutions(), parallel.solutions());
    assert_eq!(
        sequential.candidates_evaluated(),
        parallel.candidates_evaluated()
    );
}

#[test]
fn test_parallel_first_match_finds_a_known_solution() {
    let solver = Solver::new();
    let full = solver.solve(&request(&[4, 1, 8, 7], 24, SearchMode::Exhaustive));
    let quick = solver.solve_parallel(&request(&[4, 1, 8, 7], 24, SearchMode::FirstMatch));
    assert_eq!(quick.count(), 1);
    if let Some(found) = quick.first() {
        assert!(full.solutions().contains(found));
    }
}

#[test]
fn test_custom_operator_set() {
    let solver = Solver::with_operators(vec![Operator::Add]);
    let outcome = solver.solve(&request(&[1, 2, 3], 6, SearchMode::Exhaustive));
    // 6 permutations * 2 skeletons, every one sums to 6
    assert_eq!(outcome.count(), 12);

    let outcome = solver.solve(&request(&[2, 3], 6, SearchMode::Exhaustive));
    assert!(outcome.is_empty());
}

#[test]
fn test_repeated_operators_are_kept_once() {
    let solver = Solver::with_operators(vec![Operator::Add, Operator::Mul, Operator::Add]);
    assert_eq!(solver.operators(), &[Operator::Add, Operator::Mul]);

    let solver = Solver::with_operators(vec![Operator::Add, Operator::Add]);
    let outcome = solver.solve(&request(&[1, 2], 3, SearchMode::Exhaustive));
    assert_eq!(outcome.infix_strings(), vec!["(1 + 2)", "(2 + 1)"]);
    assert_eq!(outcome.candidates_evaluated(), 2);
}

#[test]
fn test_pow_candidates_are_rejected() {
    let solver = Solver::with_operators(vec![Operator::Pow, Operator::Add]);
    let outcome = solver.solve(&request(&[2, 3], 8, SearchMode::Exhaustive));
    assert!(outcome.is_empty());

    let outcome = solver.solve(&request(&[2, 3], 5, SearchMode::Exhaustive));
    assert_eq!(outcome.infix_strings(), vec!["(2 + 3)", "(3 + 2)"]);
}

#[test]
fn test_skeletons_are_cached_per_operand_count() {
    let solver = Solver::new();
    assert!(solver.skeleton_cache().is_empty());
    solver.solve(&request(&[1, 2, 3], 6, SearchMode::Exhaustive));
    solver.solve(&request(&[4, 5, 6], 6, SearchMode::Exhaustive));
    assert_eq!(solver.skeleton_cache().len(), 1);
    assert!(solver.skeleton_cache().contains(3));
}

#[test]
fn test_empty_request_is_rejected() {
    let result = SearchRequest::with_integer_target(vec![], 24, SearchMode::Exhaustive);
    assert!(matches!(
        result,
        Err(SolverError::UtilsError(UtilsError::EmptyOperands))
    ));
}

#[test]
fn test_candidate_bound() {
    assert_eq!(candidate_bound(1, 4), Some(1));
    assert_eq!(candidate_bound(2, 4), Some(8));
    assert_eq!(candidate_bound(4, 4), Some(24 * 64 * 5));
    assert_eq!(candidate_bound(40, 4), None);
}
