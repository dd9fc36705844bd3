//! Iterative deepening: shallowest-depth guarantees under unit step costs.

use conformance_tests::{plain_lattice, reference_two_jars};
use wayfinder_search::search::{breadth_first_search, iterative_deepening_search};

#[test]
fn plan_depth_matches_bfs_on_the_two_jars_start() {
    let ids = iterative_deepening_search(&reference_two_jars());
    let bfs = breadth_first_search(&reference_two_jars());
    assert_eq!(
        ids.solution.map(|s| s.actions.len()),
        bfs.solution.map(|s| s.actions.len()),
        "a goal at depth d must be found with exactly d actions",
    );
}

#[test]
fn plan_depth_is_the_slot_count_on_the_lattice() {
    // Every complete assignment is exactly `slots` writes deep.
    let world = plain_lattice(3, 2);
    let result = iterative_deepening_search(&world);
    let solution = result.solution.expect("goal is reachable");
    assert_eq!(solution.actions.len(), 3);
}

#[test]
fn single_slot_lattice_solves_in_one_move() {
    let world = plain_lattice(1, 1);
    let result = iterative_deepening_search(&world);
    let solution = result.solution.expect("goal is reachable");
    assert_eq!(solution.actions.len(), 1);
    assert_eq!(result.stats.expansions, 1, "only the bound-1 round expands");
}
