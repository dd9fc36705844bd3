//! Reference scenarios for the two-jars world: legal-move enumeration,
//! pouring semantics, and a solved run replayed to the goal.

use conformance_tests::reference_two_jars;
use wayfinder_harness::worlds::two_jars::{JarAction, TwoJarsState};
use wayfinder_search::problem::Problem;
use wayfinder_search::search::breadth_first_search;

#[test]
fn legal_moves_from_one_three_are_exactly_four() {
    let moves = TwoJarsState::new(1, 3).legal_moves();
    assert_eq!(
        moves,
        vec![
            JarAction::FillJ4,
            JarAction::PourJ3IntoJ4,
            JarAction::EmptyJ3,
            JarAction::EmptyJ4,
        ],
    );
    let labels: Vec<&str> = moves.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["fillJ4", "pourJ3intoJ4", "emptyJ3", "emptyJ4"]);
}

#[test]
fn pouring_one_liter_across() {
    let poured = TwoJarsState::new(1, 0).result(JarAction::PourJ4IntoJ3);
    assert_eq!(poured, TwoJarsState::new(0, 1));
}

#[test]
fn bfs_plan_replays_to_two_liters_in_the_big_jar() {
    let problem = reference_two_jars();
    let result = breadth_first_search(&problem);
    let solution = result.solution.expect("a plan exists from (1, 3)");
    assert!(!solution.actions.is_empty());

    let mut state = problem.start();
    for action in &solution.actions {
        assert!(state.is_legal(*action), "plan replays only legal moves");
        state = state.result(*action);
    }
    assert_eq!(state.j4(), 2);
}
