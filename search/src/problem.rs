//! Problem contract: the capability trait a domain must implement.
//!
//! # Contract
//!
//! - All methods are pure functions of their inputs. No side effects, so a
//!   state can be revisited or cached safely.
//! - Step costs are non-negative. `action_cost` must agree with the cost
//!   reported by `expand` for the same transition; disagreement is a caller
//!   programming error (debug-asserted during replay), not a runtime
//!   condition the engine recovers from.

use std::hash::Hash;

use crate::error::SearchError;

/// Path cost. Integer end to end: accumulation uses saturating addition, so
/// ordering stays total and runs stay reproducible on any platform.
pub type Cost = i64;

/// A single `(child, action, step cost)` transition reported by
/// [`Problem::expand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    /// The child state reached by taking `action`.
    pub state: S,
    /// The transition label.
    pub action: A,
    /// Incremental cost of the transition (non-negative).
    pub cost: Cost,
}

/// The contract a domain must implement to be searched by any driver.
///
/// A domain provides:
/// - The start state
/// - A goal test
/// - Successor generation with per-step costs
/// - A cost oracle for individual transitions
///
/// A domain does NOT provide:
/// - Frontier management, visited-set bookkeeping, or path reconstruction
///   (driver concerns)
/// - Heuristics (a separate, optional collaborator)
pub trait Problem {
    /// Domain state. Opaque to the engine; equality and hashing are the only
    /// capabilities required, so states can key visited sets and path maps.
    type State: Clone + Eq + Hash;

    /// Transition label. Equality is required so a plan can be validated by
    /// replay against `expand`.
    type Action: Clone + PartialEq;

    /// The start state for the search.
    fn start(&self) -> Self::State;

    /// True if and only if `state` is a valid goal state.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All legal transitions out of `state`.
    ///
    /// Must be deterministic: the same state yields the same successors in
    /// the same order.
    fn expand(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// The cost of the `(state, action, next_state)` transition.
    ///
    /// Must agree with the cost reported by [`Problem::expand`] for the same
    /// transition.
    fn action_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        next_state: &Self::State,
    ) -> Cost;
}

/// A replayed action sequence: every state it touched, in order, and the
/// summed step cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayedPath<S> {
    /// Visited states, starting with [`Problem::start`]. One longer than the
    /// action sequence.
    pub states: Vec<S>,
    /// Sum of the step costs along the sequence.
    pub total_cost: Cost,
}

/// Walk an action sequence through the problem, validating each step.
///
/// This is the library's path-validity check: each action must be among the
/// successors `expand` reports from the state reached so far.
///
/// # Errors
///
/// Returns [`SearchError::IllegalAction`] at the first action that is not a
/// legal transition.
pub fn replay<P: Problem>(
    problem: &P,
    actions: &[P::Action],
) -> Result<ReplayedPath<P::State>, SearchError> {
    let mut current = problem.start();
    let mut states = Vec::with_capacity(actions.len() + 1);
    states.push(current.clone());
    let mut total_cost: Cost = 0;

    for (index, action) in actions.iter().enumerate() {
        let successor = problem
            .expand(&current)
            .into_iter()
            .find(|s| s.action == *action);
        match successor {
            Some(successor) => {
                debug_assert_eq!(
                    problem.action_cost(&current, action, &successor.state),
                    successor.cost,
                    "action_cost disagrees with the cost reported by expand",
                );
                total_cost = total_cost.saturating_add(successor.cost);
                current = successor.state;
                states.push(current.clone());
            }
            None => return Err(SearchError::IllegalAction { at_step: index }),
        }
    }

    Ok(ReplayedPath { states, total_cost })
}
