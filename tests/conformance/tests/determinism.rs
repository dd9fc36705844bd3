//! Determinism: identical inputs must produce byte-identical reports across
//! repeated runs, for every strategy.

use conformance_tests::{plain_lattice, reference_two_jars};
use wayfinder_harness::runner::{run, run_with_heuristic, Strategy};
use wayfinder_harness::worlds::lattice::UnsetSlotsHeuristic;

#[test]
fn two_jars_reports_are_identical_across_runs() {
    for strategy in Strategy::ALL {
        let first = run(&reference_two_jars(), strategy).unwrap();
        let first_bytes = serde_json::to_vec(&first.to_json()).unwrap();
        for _ in 1..5 {
            let other = run(&reference_two_jars(), strategy).unwrap();
            let other_bytes = serde_json::to_vec(&other.to_json()).unwrap();
            assert_eq!(
                first_bytes, other_bytes,
                "{strategy} report bytes differ across runs",
            );
        }
    }
}

#[test]
fn informed_lattice_reports_are_identical_across_runs() {
    let first = run_with_heuristic(&plain_lattice(4, 2), Strategy::AStar, &UnsetSlotsHeuristic)
        .unwrap();
    for _ in 1..5 {
        let other =
            run_with_heuristic(&plain_lattice(4, 2), Strategy::AStar, &UnsetSlotsHeuristic)
                .unwrap();
        assert_eq!(first, other);
    }
}
