//! Two-jars world: measure exactly 2 liters using a 4-liter and a 3-liter
//! jar.
//!
//! The classic pouring puzzle, used as the harness's reference domain. The
//! state is a small immutable value type: applying a move returns a new
//! configuration and never mutates, so frontier membership tests stay safe.

use std::fmt;

use rand::Rng;

use wayfinder_search::problem::{Cost, Problem, Successor};

/// Capacity of the larger jar, in liters.
pub const J4_CAPACITY: u8 = 4;
/// Capacity of the smaller jar, in liters.
pub const J3_CAPACITY: u8 = 3;

/// One of the six fill/pour/empty moves.
///
/// `Display` yields the conventional labels (`fillJ4`, `pourJ3intoJ4`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JarAction {
    FillJ4,
    FillJ3,
    PourJ3IntoJ4,
    PourJ4IntoJ3,
    EmptyJ3,
    EmptyJ4,
}

impl JarAction {
    /// All moves in canonical enumeration order.
    pub const ALL: [JarAction; 6] = [
        JarAction::FillJ4,
        JarAction::FillJ3,
        JarAction::PourJ3IntoJ4,
        JarAction::PourJ4IntoJ3,
        JarAction::EmptyJ3,
        JarAction::EmptyJ4,
    ];

    /// The conventional label for this move.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FillJ4 => "fillJ4",
            Self::FillJ3 => "fillJ3",
            Self::PourJ3IntoJ4 => "pourJ3intoJ4",
            Self::PourJ4IntoJ3 => "pourJ4intoJ3",
            Self::EmptyJ3 => "emptyJ3",
            Self::EmptyJ4 => "emptyJ4",
        }
    }
}

impl fmt::Display for JarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A configuration of the two jars.
///
/// Structural equality and a derived hash: two configurations holding the
/// same volumes are the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwoJarsState {
    j4: u8,
    j3: u8,
}

impl TwoJarsState {
    /// Construct a configuration.
    ///
    /// # Panics
    ///
    /// Panics if a volume exceeds its jar's capacity.
    #[must_use]
    pub fn new(j4: u8, j3: u8) -> Self {
        assert!(j4 <= J4_CAPACITY, "J4 volume {j4} exceeds capacity {J4_CAPACITY}");
        assert!(j3 <= J3_CAPACITY, "J3 volume {j3} exceeds capacity {J3_CAPACITY}");
        Self { j4, j3 }
    }

    /// Volume in the 4-liter jar.
    #[must_use]
    pub fn j4(self) -> u8 {
        self.j4
    }

    /// Volume in the 3-liter jar.
    #[must_use]
    pub fn j3(self) -> u8 {
        self.j3
    }

    /// Goal test: the 4-liter jar holds exactly 2 liters.
    #[must_use]
    pub fn is_goal(self) -> bool {
        self.j4 == 2
    }

    /// Whether a move would change the configuration: filling requires
    /// headroom, emptying requires content, pouring requires a nonempty
    /// source and a non-full destination.
    #[must_use]
    pub fn is_legal(self, action: JarAction) -> bool {
        match action {
            JarAction::FillJ4 => self.j4 < J4_CAPACITY,
            JarAction::FillJ3 => self.j3 < J3_CAPACITY,
            JarAction::PourJ3IntoJ4 => self.j3 > 0 && self.j4 < J4_CAPACITY,
            JarAction::PourJ4IntoJ3 => self.j4 > 0 && self.j3 < J3_CAPACITY,
            JarAction::EmptyJ3 => self.j3 > 0,
            JarAction::EmptyJ4 => self.j4 > 0,
        }
    }

    /// Legal moves from this configuration, in canonical order.
    #[must_use]
    pub fn legal_moves(self) -> Vec<JarAction> {
        JarAction::ALL
            .into_iter()
            .filter(|&action| self.is_legal(action))
            .collect()
    }

    /// Apply a move, returning the new configuration. The receiver is never
    /// mutated.
    #[must_use]
    pub fn result(self, action: JarAction) -> Self {
        match action {
            JarAction::FillJ4 => Self {
                j4: J4_CAPACITY,
                j3: self.j3,
            },
            JarAction::FillJ3 => Self {
                j4: self.j4,
                j3: J3_CAPACITY,
            },
            JarAction::EmptyJ4 => Self {
                j4: 0,
                j3: self.j3,
            },
            JarAction::EmptyJ3 => Self {
                j4: self.j4,
                j3: 0,
            },
            JarAction::PourJ3IntoJ4 => {
                let transfer = self.j3.min(J4_CAPACITY - self.j4);
                Self {
                    j4: self.j4 + transfer,
                    j3: self.j3 - transfer,
                }
            }
            JarAction::PourJ4IntoJ3 => {
                let transfer = self.j4.min(J3_CAPACITY - self.j3);
                Self {
                    j4: self.j4 - transfer,
                    j3: self.j3 + transfer,
                }
            }
        }
    }
}

impl fmt::Display for TwoJarsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J4: {} | J3: {}", self.j4, self.j3)
    }
}

/// The two-jars domain plugged into the engine. Every step costs 1.
#[derive(Debug, Clone, Copy)]
pub struct TwoJarsProblem {
    start: TwoJarsState,
}

impl TwoJarsProblem {
    /// Create a problem searching from `start`.
    #[must_use]
    pub fn new(start: TwoJarsState) -> Self {
        Self { start }
    }
}

impl Problem for TwoJarsProblem {
    type State = TwoJarsState;
    type Action = JarAction;

    fn start(&self) -> TwoJarsState {
        self.start
    }

    fn is_goal(&self, state: &TwoJarsState) -> bool {
        state.is_goal()
    }

    fn expand(&self, state: &TwoJarsState) -> Vec<Successor<TwoJarsState, JarAction>> {
        state
            .legal_moves()
            .into_iter()
            .map(|action| Successor {
                state: state.result(action),
                action,
                cost: 1,
            })
            .collect()
    }

    fn action_cost(
        &self,
        state: &TwoJarsState,
        action: &JarAction,
        next_state: &TwoJarsState,
    ) -> Cost {
        debug_assert_eq!(
            state.result(*action),
            *next_state,
            "action_cost called with a mismatched transition",
        );
        1
    }
}

/// Scramble a solved configuration by applying `moves` random legal moves.
///
/// Deterministic for a given RNG state, so demo runs are reproducible from
/// a seed.
pub fn random_state<R: Rng>(moves: usize, rng: &mut R) -> TwoJarsState {
    let mut state = TwoJarsState::new(2, rng.gen_range(0..=J3_CAPACITY));
    for _ in 0..moves {
        let legal = state.legal_moves();
        state = state.result(legal[rng.gen_range(0..legal.len())]);
    }
    state
}
