//! Optimality guarantees: BFS on action count, uniform-cost and A* on
//! summed step cost.

use conformance_tests::{plain_lattice, reference_two_jars, trapped_lattice};
use wayfinder_harness::worlds::lattice::UnsetSlotsHeuristic;
use wayfinder_search::search::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search,
};

#[test]
fn bfs_finds_the_four_move_plan() {
    let result = breadth_first_search(&reference_two_jars());
    let solution = result.solution.expect("a plan exists from (1, 3)");
    assert_eq!(solution.actions.len(), 4, "(1, 3) is four moves from a goal");
}

#[test]
fn bfs_plan_is_never_longer_than_the_dfs_plan() {
    let problem = reference_two_jars();
    let bfs_len = breadth_first_search(&problem)
        .solution
        .expect("a plan exists")
        .actions
        .len();
    let dfs_len = depth_first_search(&problem)
        .solution
        .expect("a plan exists")
        .actions
        .len();
    assert!(bfs_len <= dfs_len);
}

#[test]
fn uniform_cost_finds_the_all_ones_assignment() {
    let world = plain_lattice(4, 3);
    let result = uniform_cost_search(&world);
    let solution = result.solution.expect("goal is reachable");
    assert_eq!(solution.cost, 4, "one unit per slot is the cheapest");
    assert!(solution.actions.iter().all(|action| action.value == 1));
}

#[test]
fn admissible_heuristic_keeps_the_zero_heuristic_cost() {
    let world = plain_lattice(4, 2);
    let uninformed = uniform_cost_search(&world);
    let informed = astar_search(&world, &UnsetSlotsHeuristic);
    assert_eq!(
        informed.solution.as_ref().map(|s| s.cost),
        uninformed.solution.as_ref().map(|s| s.cost),
        "the heuristic may change search order, never the optimal cost",
    );
}

#[test]
fn informed_search_expands_no_more_than_uninformed() {
    let world = plain_lattice(4, 2);
    let uninformed = uniform_cost_search(&world);
    let informed = astar_search(&world, &UnsetSlotsHeuristic);
    assert!(informed.stats.expansions <= uninformed.stats.expansions);
}

#[test]
fn optimal_cost_routes_around_traps() {
    // Slot 0 must avoid value 1 (trap and goal exclusion), so the cheapest
    // plan pays 2 there and 1 everywhere else.
    let world = trapped_lattice(3, 2);
    let result = uniform_cost_search(&world);
    let solution = result.solution.expect("the untrapped branch reaches a goal");
    assert_eq!(solution.cost, 4);
}
