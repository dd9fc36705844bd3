//! The generalized graph-search routine driven by the two-jars state graph.

use conformance_tests::reference_two_jars;
use wayfinder_harness::worlds::two_jars::TwoJarsState;
use wayfinder_search::frontier::{QueueFrontier, StackFrontier};
use wayfinder_search::graph::{graph_search, GraphSearchOutcome};
use wayfinder_search::problem::Problem;

fn children(state: &TwoJarsState) -> Vec<TwoJarsState> {
    state
        .legal_moves()
        .into_iter()
        .map(|action| state.result(action))
        .collect()
}

#[test]
fn stack_ordered_search_reaches_the_goal() {
    let start = reference_two_jars().start();
    let outcome = graph_search(
        start,
        StackFrontier::new(),
        |state: &TwoJarsState| state.is_goal(),
        children,
    );
    let GraphSearchOutcome::Found(path) = outcome else {
        panic!("the goal is reachable from (1, 3)");
    };
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last().map(|state| state.j4()), Some(2));
    for pair in path.windows(2) {
        assert!(
            children(&pair[0]).contains(&pair[1]),
            "every consecutive pair must be a legal transition",
        );
    }
}

#[test]
fn queue_ordering_finds_a_path_of_bfs_depth() {
    let start = reference_two_jars().start();
    let outcome = graph_search(
        start,
        QueueFrontier::new(),
        |state: &TwoJarsState| state.is_goal(),
        children,
    );
    let GraphSearchOutcome::Found(path) = outcome else {
        panic!("the goal is reachable from (1, 3)");
    };
    // Path includes the start, so a four-move plan is five states.
    assert_eq!(path.len(), 5);
}

#[test]
fn impossible_goal_returns_the_failure_value() {
    let start = reference_two_jars().start();
    let outcome = graph_search(start, StackFrontier::new(), |_: &TwoJarsState| false, children);
    assert_eq!(outcome, GraphSearchOutcome::Failed);
}
