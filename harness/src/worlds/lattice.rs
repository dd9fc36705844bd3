//! Parameterized lattice world for stress-testing the drivers.
//!
//! State is a row of slots, each unset or holding a value in `1..=V`. A move
//! writes a value into one unset slot; its cost is the value written, so
//! cost-ordered strategies prefer all-ones assignments. Because any unset
//! slot can be written next, the same assignment is reachable via many
//! orderings, which naturally generates duplicate states for visited-set
//! suppression. Configurable trap rules and goal profiles force specific
//! stress axes (dead ends, unreachable goals, duplicate pressure) without
//! changing the drivers.

use std::fmt;

use wayfinder_search::heuristic::Heuristic;
use wayfinder_search::problem::{Cost, Problem, Successor};

/// Marker for a slot with no value written yet.
pub const UNSET: u8 = 0;

/// Trap rule: controls deterministic dead-end generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapRule {
    /// No trap states.
    None,
    /// States whose first slot holds this value have no successors.
    Slot0Eq(u8),
}

/// Goal profile: controls when a state is a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalProfile {
    /// Goal when every slot is set.
    AllSet,
    /// Intentionally unreachable goal (forces frontier exhaustion).
    Never,
    /// Goal when every slot is set AND the first slot does not hold this
    /// value. Pair with [`TrapRule::Slot0Eq`] so trap branches are dead ends
    /// while the rest can still reach the goal.
    AllSetExceptSlot0Eq(u8),
}

/// Configuration for a lattice world instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Number of slots.
    pub slots: u8,
    /// Number of distinct values a slot can take.
    pub values_per_slot: u8,
    /// Trap rule for dead-end generation.
    pub trap_rule: TrapRule,
    /// Goal profile.
    pub goal_profile: GoalProfile,
}

/// A slot assignment. Writing a slot returns a new state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LatticeState {
    slots: Vec<u8>,
}

impl LatticeState {
    /// The blank assignment: every slot unset.
    #[must_use]
    pub fn blank(slots: u8) -> Self {
        Self {
            slots: vec![UNSET; slots as usize],
        }
    }

    /// Value held by `slot`.
    #[must_use]
    pub fn slot(&self, slot: u8) -> u8 {
        self.slots[slot as usize]
    }

    /// Number of slots still unset.
    #[must_use]
    pub fn unset_count(&self) -> usize {
        self.slots.iter().filter(|&&v| v == UNSET).count()
    }

    /// A copy of this assignment with `value` written into `slot`.
    #[must_use]
    pub fn with(&self, slot: u8, value: u8) -> Self {
        let mut slots = self.slots.clone();
        slots[slot as usize] = value;
        Self { slots }
    }
}

impl fmt::Display for LatticeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &value) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if value == UNSET {
                write!(f, "_")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        write!(f, "]")
    }
}

/// A single move: write `value` into slot `slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetSlot {
    /// The slot index to write.
    pub slot: u8,
    /// The value to write (`1..=values_per_slot`).
    pub value: u8,
}

impl fmt::Display for SetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set{}={}", self.slot, self.value)
    }
}

/// The lattice domain plugged into the engine. Step cost is the value
/// written, so the cheapest complete assignment is all ones.
pub struct LatticeProblem {
    config: LatticeConfig,
    world_id: String,
}

impl LatticeProblem {
    /// Construct a lattice world from config.
    ///
    /// # Panics
    ///
    /// Panics if `slots` is zero, `values_per_slot` is zero, or a trap/goal
    /// value is outside `1..=values_per_slot`.
    #[must_use]
    pub fn new(config: LatticeConfig) -> Self {
        assert!(config.slots > 0, "lattice needs at least one slot");
        assert!(
            config.values_per_slot > 0,
            "lattice needs at least one value per slot",
        );
        if let TrapRule::Slot0Eq(value) = config.trap_rule {
            assert!(
                (1..=config.values_per_slot).contains(&value),
                "trap value {value} outside 1..={}",
                config.values_per_slot,
            );
        }
        if let GoalProfile::AllSetExceptSlot0Eq(value) = config.goal_profile {
            assert!(
                (1..=config.values_per_slot).contains(&value),
                "goal-exclusion value {value} outside 1..={}",
                config.values_per_slot,
            );
        }

        let trap = match config.trap_rule {
            TrapRule::None => "none".to_string(),
            TrapRule::Slot0Eq(value) => format!("slot0eq{value}"),
        };
        let goal = match config.goal_profile {
            GoalProfile::AllSet => "all_set".to_string(),
            GoalProfile::Never => "never".to_string(),
            GoalProfile::AllSetExceptSlot0Eq(value) => format!("all_set_except_slot0eq{value}"),
        };
        let world_id = format!(
            "lattice:n{}:v{}:trap_{}:goal_{}",
            config.slots, config.values_per_slot, trap, goal,
        );

        Self { config, world_id }
    }

    /// Unique identifier derived from the configuration.
    #[must_use]
    pub fn world_id(&self) -> &str {
        &self.world_id
    }

    /// Read the config (for test assertions).
    #[must_use]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    fn is_trap(&self, state: &LatticeState) -> bool {
        match self.config.trap_rule {
            TrapRule::None => false,
            TrapRule::Slot0Eq(value) => state.slot(0) == value,
        }
    }
}

impl Problem for LatticeProblem {
    type State = LatticeState;
    type Action = SetSlot;

    fn start(&self) -> LatticeState {
        LatticeState::blank(self.config.slots)
    }

    fn is_goal(&self, state: &LatticeState) -> bool {
        match self.config.goal_profile {
            GoalProfile::AllSet => state.unset_count() == 0,
            GoalProfile::Never => false,
            GoalProfile::AllSetExceptSlot0Eq(value) => {
                state.unset_count() == 0 && state.slot(0) != value
            }
        }
    }

    fn expand(&self, state: &LatticeState) -> Vec<Successor<LatticeState, SetSlot>> {
        if self.is_trap(state) {
            return Vec::new();
        }

        let mut successors = Vec::new();
        // Slot ascending, value ascending: deterministic enumeration order.
        for slot in 0..self.config.slots {
            if state.slot(slot) != UNSET {
                continue;
            }
            for value in 1..=self.config.values_per_slot {
                let action = SetSlot { slot, value };
                successors.push(Successor {
                    state: state.with(slot, value),
                    action,
                    cost: Cost::from(value),
                });
            }
        }
        successors
    }

    fn action_cost(
        &self,
        state: &LatticeState,
        action: &SetSlot,
        next_state: &LatticeState,
    ) -> Cost {
        debug_assert_eq!(
            state.with(action.slot, action.value),
            *next_state,
            "action_cost called with a mismatched transition",
        );
        Cost::from(action.value)
    }
}

/// Every unset slot still needs at least one unit of cost, so this estimate
/// never overstates the true remaining cost and satisfies the triangle
/// inequality across single-slot writes: admissible and consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsetSlotsHeuristic;

impl Heuristic<LatticeProblem> for UnsetSlotsHeuristic {
    fn estimate(&self, state: &LatticeState, _problem: &LatticeProblem) -> Cost {
        state.unset_count() as Cost
    }
}
