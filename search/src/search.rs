//! Search drivers and their shared expansion loop.
//!
//! All drivers share the shape: seed the frontier with the start node, loop
//! popping nodes, test the goal at pop time, expand successors. They differ
//! only in frontier ordering and duplicate handling:
//!
//! - [`depth_first_search`] / [`breadth_first_search`]: one loop over a LIFO
//!   or FIFO frontier with a never-re-expand visited set.
//! - [`astar_search`] / [`uniform_cost_search`]: priority frontier keyed by
//!   `g + h`, with the strict-improvement reopening rule.
//! - [`iterative_deepening_search`]: depth-limited depth-first rounds with an
//!   increasing bound and a per-round path set.
//!
//! Every driver owns its containers for exactly one invocation; nothing
//! survives the call.

use std::collections::{HashMap, HashSet};

use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::node::SearchNode;
use crate::problem::{Cost, Problem};

/// Why a driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was popped from the frontier.
    GoalReached,
    /// The frontier emptied without reaching a goal. Not an error: it means
    /// no solution is reachable from the start state.
    FrontierExhausted,
}

impl TerminationReason {
    /// Stable lower-snake name used in the JSON report surface.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// Counters describing a single driver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal pops and suppressed pops excluded).
    pub expansions: u64,
    /// Nodes created, root included.
    pub generated: u64,
    /// Pops and pushes suppressed by the visited set (for A*, pops that did
    /// not strictly improve the recorded g-cost).
    pub duplicates_suppressed: u64,
    /// Peak frontier size. Zero for the recursive iterative-deepening
    /// driver, which keeps no frontier.
    pub frontier_high_water: usize,
    /// Why the driver stopped.
    pub termination: TerminationReason,
}

impl SearchStats {
    /// Render the counters as a JSON value for the report surface.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions,
            "generated": self.generated,
            "duplicates_suppressed": self.duplicates_suppressed,
            "frontier_high_water": self.frontier_high_water,
            "termination": self.termination.as_str(),
        })
    }
}

/// A found plan: the action sequence and its summed step cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<A> {
    /// Actions from the start state to a goal state, in execution order.
    pub actions: Vec<A>,
    /// Sum of the step costs along the plan.
    pub cost: Cost,
}

/// Result of one driver invocation.
///
/// Always carries statistics regardless of how the search terminated. Check
/// [`SearchResult::is_goal_reached`] or `stats.termination` to distinguish a
/// found plan from exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<A> {
    /// The plan, if a goal was reached.
    pub solution: Option<Solution<A>>,
    /// Counters for this invocation.
    pub stats: SearchStats,
}

impl<A> SearchResult<A> {
    /// True if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.stats.termination, TerminationReason::GoalReached)
    }
}

/// Running counters shared by the driver loops.
#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    expansions: u64,
    generated: u64,
    duplicates_suppressed: u64,
}

impl Counters {
    fn into_stats(self, frontier_high_water: usize, termination: TerminationReason) -> SearchStats {
        SearchStats {
            expansions: self.expansions,
            generated: self.generated,
            duplicates_suppressed: self.duplicates_suppressed,
            frontier_high_water,
            termination,
        }
    }
}

/// The loop shared by the uninformed drivers. Frontier ordering is the only
/// difference between depth-first and breadth-first search.
fn uninformed_search<P, F>(problem: &P, mut frontier: F) -> SearchResult<P::Action>
where
    P: Problem,
    F: Frontier<SearchNode<P::State, P::Action>>,
{
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut counters = Counters {
        generated: 1,
        ..Counters::default()
    };

    frontier.push(SearchNode::root(problem.start()));

    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            let stats =
                counters.into_stats(frontier.high_water(), TerminationReason::GoalReached);
            return SearchResult {
                solution: Some(Solution {
                    actions: node.actions,
                    cost: node.g_cost,
                }),
                stats,
            };
        }

        if visited.insert(node.state.clone()) {
            counters.expansions += 1;
            for successor in problem.expand(&node.state) {
                debug_assert!(successor.cost >= 0, "step costs must be non-negative");
                if visited.contains(&successor.state) {
                    counters.duplicates_suppressed += 1;
                    continue;
                }
                frontier.push(node.child(successor.state, successor.action, successor.cost));
                counters.generated += 1;
            }
        } else {
            counters.duplicates_suppressed += 1;
        }
    }

    SearchResult {
        solution: None,
        stats: counters.into_stats(frontier.high_water(), TerminationReason::FrontierExhausted),
    }
}

/// Depth-first search: LIFO frontier, visited set mandatory.
///
/// Complete on any finite reachable state space (the visited set guarantees
/// termination); not optimal.
#[must_use]
pub fn depth_first_search<P: Problem>(problem: &P) -> SearchResult<P::Action> {
    uninformed_search(problem, StackFrontier::new())
}

/// Breadth-first search: FIFO frontier, visited set mandatory.
///
/// Returns a shortest action sequence (by step count) whenever all step
/// costs are uniform.
#[must_use]
pub fn breadth_first_search<P: Problem>(problem: &P) -> SearchResult<P::Action> {
    uninformed_search(problem, QueueFrontier::new())
}

/// A* search: priority frontier keyed by `g(state) + h(state)`.
///
/// A popped state is (re-)expanded iff it has not been visited, or the newly
/// reported g is strictly lower than the recorded one. The reopening rule is
/// what keeps the result optimal under an admissible but inconsistent
/// heuristic; with a consistent heuristic it never triggers and the loop
/// degenerates to the classical closed-set form.
///
/// Returns the action sequence of the first goal popped, which priority
/// order makes a minimum-cost plan when the heuristic is admissible.
#[must_use]
pub fn astar_search<P, H>(problem: &P, heuristic: &H) -> SearchResult<P::Action>
where
    P: Problem,
    H: Heuristic<P>,
{
    let mut frontier: PriorityFrontier<SearchNode<P::State, P::Action>> = PriorityFrontier::new();
    let mut best_g: HashMap<P::State, Cost> = HashMap::new();
    let mut counters = Counters {
        generated: 1,
        ..Counters::default()
    };

    let root = SearchNode::root(problem.start());
    let root_estimate = heuristic.estimate(&root.state, problem);
    debug_assert!(root_estimate >= 0, "heuristic estimates must be non-negative");
    frontier.push(root, root_estimate);

    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            let stats =
                counters.into_stats(frontier.high_water(), TerminationReason::GoalReached);
            return SearchResult {
                solution: Some(Solution {
                    actions: node.actions,
                    cost: node.g_cost,
                }),
                stats,
            };
        }

        let improves = match best_g.get(&node.state) {
            Some(&recorded) => node.g_cost < recorded,
            None => true,
        };
        if !improves {
            counters.duplicates_suppressed += 1;
            continue;
        }
        best_g.insert(node.state.clone(), node.g_cost);
        counters.expansions += 1;

        for successor in problem.expand(&node.state) {
            debug_assert!(successor.cost >= 0, "step costs must be non-negative");
            let estimate = heuristic.estimate(&successor.state, problem);
            debug_assert!(estimate >= 0, "heuristic estimates must be non-negative");
            let child = node.child(successor.state, successor.action, successor.cost);
            let priority = child.g_cost.saturating_add(estimate);
            frontier.push(child, priority);
            counters.generated += 1;
        }
    }

    SearchResult {
        solution: None,
        stats: counters.into_stats(frontier.high_water(), TerminationReason::FrontierExhausted),
    }
}

/// Uniform-cost search: A* with the zero heuristic.
#[must_use]
pub fn uniform_cost_search<P: Problem>(problem: &P) -> SearchResult<P::Action> {
    astar_search(problem, &ZeroHeuristic)
}

/// A goal hit found by a depth-limited round. Actions are collected in
/// reverse while the recursion unwinds.
struct DepthLimitedHit<A> {
    reversed_actions: Vec<A>,
    cost: Cost,
}

/// One depth-limited depth-first probe.
///
/// `on_path` holds the states along the current recursion path; a state is
/// removed when the probe backtracks out of it, so it may be revisited via a
/// different path within the same round while cycles along the current path
/// are excluded.
fn depth_limited<P: Problem>(
    problem: &P,
    state: &P::State,
    bound: u64,
    on_path: &mut HashSet<P::State>,
    counters: &mut Counters,
) -> Option<DepthLimitedHit<P::Action>> {
    if problem.is_goal(state) {
        return Some(DepthLimitedHit {
            reversed_actions: Vec::new(),
            cost: 0,
        });
    }
    if bound == 0 {
        return None;
    }

    on_path.insert(state.clone());
    counters.expansions += 1;
    for successor in problem.expand(state) {
        if on_path.contains(&successor.state) {
            counters.duplicates_suppressed += 1;
            continue;
        }
        counters.generated += 1;
        if let Some(mut hit) =
            depth_limited(problem, &successor.state, bound - 1, on_path, counters)
        {
            hit.reversed_actions.push(successor.action);
            hit.cost = hit.cost.saturating_add(successor.cost);
            return Some(hit);
        }
    }
    on_path.remove(state);
    None
}

/// Iterative-deepening search: depth-limited depth-first rounds with bounds
/// 0, 1, 2, … and a per-round path set cleared between rounds.
///
/// For a goal reachable at depth `d` under unit step costs, returns a plan
/// of exactly `d` actions, and never a longer one before exhausting all
/// shallower bounds. Trades the breadth-first memory footprint for repeated
/// shallow work.
///
/// There is no upper bound: if the goal is unreachable this driver never
/// terminates. A caller needing bounded time must impose the bound
/// externally.
#[must_use]
pub fn iterative_deepening_search<P: Problem>(problem: &P) -> SearchResult<P::Action> {
    let mut counters = Counters {
        generated: 1,
        ..Counters::default()
    };
    let start = problem.start();

    let mut bound: u64 = 0;
    loop {
        let mut on_path: HashSet<P::State> = HashSet::new();
        if let Some(hit) = depth_limited(problem, &start, bound, &mut on_path, &mut counters) {
            let mut actions = hit.reversed_actions;
            actions.reverse();
            return SearchResult {
                solution: Some(Solution {
                    actions,
                    cost: hit.cost,
                }),
                stats: counters.into_stats(0, TerminationReason::GoalReached),
            };
        }
        bound += 1;
    }
}
