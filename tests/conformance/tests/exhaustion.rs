//! Exhaustion is an explicit result, not a fault. Iterative deepening is
//! absent here by design: it never terminates on unreachable goals.

use conformance_tests::unreachable_lattice;
use wayfinder_search::frontier::StackFrontier;
use wayfinder_search::graph::{graph_search, GraphSearchOutcome};
use wayfinder_search::problem::Problem;
use wayfinder_search::search::{
    breadth_first_search, depth_first_search, uniform_cost_search, TerminationReason,
};

#[test]
fn every_terminating_driver_reports_frontier_exhaustion() {
    let world = unreachable_lattice(2, 2);
    for result in [
        depth_first_search(&world),
        breadth_first_search(&world),
        uniform_cost_search(&world),
    ] {
        assert!(result.solution.is_none());
        assert_eq!(
            result.stats.termination,
            TerminationReason::FrontierExhausted
        );
        assert!(
            result.stats.expansions > 0,
            "the whole space should be explored before giving up",
        );
    }
}

#[test]
fn graph_search_reports_the_failure_value() {
    let world = unreachable_lattice(2, 2);
    let outcome = graph_search(
        world.start(),
        StackFrontier::new(),
        |state| world.is_goal(state),
        |state| {
            world
                .expand(state)
                .into_iter()
                .map(|successor| successor.state)
                .collect::<Vec<_>>()
        },
    );
    assert_eq!(outcome, GraphSearchOutcome::Failed);
}
