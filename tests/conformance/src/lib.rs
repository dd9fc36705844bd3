//! Shared fixtures for the conformance test suite.

#![forbid(unsafe_code)]

use wayfinder_harness::worlds::lattice::{GoalProfile, LatticeConfig, LatticeProblem, TrapRule};
use wayfinder_harness::worlds::two_jars::{TwoJarsProblem, TwoJarsState};

/// The reference two-jars start used across the suite: jars at (1, 3).
#[must_use]
pub fn reference_two_jars() -> TwoJarsProblem {
    TwoJarsProblem::new(TwoJarsState::new(1, 3))
}

/// A plain lattice: no traps, goal when every slot is set.
#[must_use]
pub fn plain_lattice(slots: u8, values_per_slot: u8) -> LatticeProblem {
    LatticeProblem::new(LatticeConfig {
        slots,
        values_per_slot,
        trap_rule: TrapRule::None,
        goal_profile: GoalProfile::AllSet,
    })
}

/// A lattice whose goal is unreachable: every driver must exhaust.
#[must_use]
pub fn unreachable_lattice(slots: u8, values_per_slot: u8) -> LatticeProblem {
    LatticeProblem::new(LatticeConfig {
        slots,
        values_per_slot,
        trap_rule: TrapRule::None,
        goal_profile: GoalProfile::Never,
    })
}

/// A lattice where writing 1 into slot 0 dead-ends, and the goal excludes
/// that branch.
#[must_use]
pub fn trapped_lattice(slots: u8, values_per_slot: u8) -> LatticeProblem {
    LatticeProblem::new(LatticeConfig {
        slots,
        values_per_slot,
        trap_rule: TrapRule::Slot0Eq(1),
        goal_profile: GoalProfile::AllSetExceptSlot0Eq(1),
    })
}
