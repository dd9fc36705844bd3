//! Search node and priority-frontier ordering key.

use crate::problem::Cost;

/// A node in a driver's working set: a state plus the bookkeeping needed to
/// report a solution without a separate path map.
///
/// Constructed fresh per expansion and owned by the running driver. Not a
/// persistent entity: nodes die with the invocation that created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    /// The state this node represents.
    pub state: S,
    /// The action sequence that reached `state` from the start.
    pub actions: Vec<A>,
    /// Accumulated path cost from the start.
    pub g_cost: Cost,
}

impl<S, A: Clone> SearchNode<S, A> {
    /// The root node: start state, empty action sequence, zero cost.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            actions: Vec::new(),
            g_cost: 0,
        }
    }

    /// A child node one transition further along.
    #[must_use]
    pub fn child(&self, state: S, action: A, step_cost: Cost) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Self {
            state,
            actions,
            g_cost: self.g_cost.saturating_add(step_cost),
        }
    }

    /// Number of actions taken to reach this node (the node's depth).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.actions.len()
    }
}

/// The priority-frontier ordering key: `(priority, insertion_order)`.
///
/// Lower priority first; ties broken by older insertion order, which keeps
/// priority pops stable and runs reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityKey {
    /// The registered priority (accumulated cost plus heuristic estimate).
    pub priority: Cost,
    /// Frontier-assigned monotonic counter for deterministic tie-breaking.
    pub insertion_order: u64,
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}
