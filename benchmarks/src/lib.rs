//! Shared helpers for wayfinder benchmark suites.

#![forbid(unsafe_code)]

use wayfinder_harness::worlds::lattice::{GoalProfile, LatticeConfig, LatticeProblem, TrapRule};
use wayfinder_harness::worlds::two_jars::{TwoJarsProblem, TwoJarsState};

/// The reference two-jars problem benchmarked across drivers.
#[must_use]
pub fn two_jars() -> TwoJarsProblem {
    TwoJarsProblem::new(TwoJarsState::new(1, 3))
}

/// A plain lattice regime sized for driver benchmarks.
#[must_use]
pub fn lattice(slots: u8, values_per_slot: u8) -> LatticeProblem {
    LatticeProblem::new(LatticeConfig {
        slots,
        values_per_slot,
        trap_rule: TrapRule::None,
        goal_profile: GoalProfile::AllSet,
    })
}
