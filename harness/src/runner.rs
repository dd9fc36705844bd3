//! Harness runner: executes one driver against a problem and verifies what
//! came back.
//!
//! The runner uses ONLY the engine's public surface. It does not implement
//! any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! select driver → search → replay the plan through the problem
//!   → check the end state against the goal test → assemble RunReport
//! ```
//!
//! Verification is fail-closed: a plan that does not replay cleanly, misses
//! the goal, or disagrees on cost is an error, never a report.

use std::fmt::Display;

use wayfinder_search::error::SearchError;
use wayfinder_search::heuristic::{Heuristic, ZeroHeuristic};
use wayfinder_search::problem::{replay, Cost, Problem};
use wayfinder_search::search::{
    astar_search, breadth_first_search, depth_first_search, iterative_deepening_search,
    uniform_cost_search, SearchResult,
};

use crate::report::RunReport;

/// The driver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
    IterativeDeepening,
}

impl Strategy {
    /// All strategies, in the order the demo lists them.
    pub const ALL: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::IterativeDeepening,
    ];

    /// Short name used on the CLI and in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
            Self::IterativeDeepening => "ids",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("unknown strategy `{s}` (expected dfs, bfs, ucs, astar, ids)"))
    }
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The driver returned a plan that does not replay cleanly. Engine or
    /// world bug; fail closed.
    PlanVerification(SearchError),
    /// The plan replays, but its end state fails the goal test.
    PlanMissesGoal,
    /// The plan replays to a different total cost than the driver reported.
    CostMismatch { reported: Cost, replayed: Cost },
}

impl Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlanVerification(err) => write!(f, "plan verification failed: {err}"),
            Self::PlanMissesGoal => write!(f, "plan replays but does not end in a goal state"),
            Self::CostMismatch { reported, replayed } => write!(
                f,
                "plan cost mismatch: driver reported {reported}, replay summed {replayed}",
            ),
        }
    }
}

impl std::error::Error for RunError {}

/// Execute `strategy` against `problem` and verify the result by replay.
///
/// A* runs with the zero heuristic here; use [`run_with_heuristic`] to
/// supply one.
///
/// # Errors
///
/// Returns a [`RunError`] when the returned plan fails verification.
pub fn run<P>(problem: &P, strategy: Strategy) -> Result<RunReport, RunError>
where
    P: Problem,
    P::State: Display,
    P::Action: Display,
{
    run_with_heuristic(problem, strategy, &ZeroHeuristic)
}

/// Execute `strategy` against `problem` with a caller-supplied heuristic.
///
/// The heuristic only affects [`Strategy::AStar`]; the other drivers ignore
/// it.
///
/// # Errors
///
/// Returns a [`RunError`] when the returned plan fails verification.
pub fn run_with_heuristic<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
) -> Result<RunReport, RunError>
where
    P: Problem,
    P::State: Display,
    P::Action: Display,
    H: Heuristic<P>,
{
    let result = match strategy {
        Strategy::DepthFirst => depth_first_search(problem),
        Strategy::BreadthFirst => breadth_first_search(problem),
        Strategy::UniformCost => uniform_cost_search(problem),
        Strategy::AStar => astar_search(problem, heuristic),
        Strategy::IterativeDeepening => iterative_deepening_search(problem),
    };
    verify(problem, strategy, &result)
}

/// Replay the plan through the problem and assemble the report.
fn verify<P>(
    problem: &P,
    strategy: Strategy,
    result: &SearchResult<P::Action>,
) -> Result<RunReport, RunError>
where
    P: Problem,
    P::State: Display,
    P::Action: Display,
{
    let Some(solution) = &result.solution else {
        return Ok(RunReport {
            strategy: strategy.name(),
            actions: Vec::new(),
            states: Vec::new(),
            cost: None,
            stats: result.stats.clone(),
        });
    };

    let replayed = replay(problem, &solution.actions).map_err(RunError::PlanVerification)?;
    match replayed.states.last() {
        Some(end) if problem.is_goal(end) => {}
        _ => return Err(RunError::PlanMissesGoal),
    }
    if replayed.total_cost != solution.cost {
        return Err(RunError::CostMismatch {
            reported: solution.cost,
            replayed: replayed.total_cost,
        });
    }

    Ok(RunReport {
        strategy: strategy.name(),
        actions: solution.actions.iter().map(ToString::to_string).collect(),
        states: replayed.states.iter().map(ToString::to_string).collect(),
        cost: Some(solution.cost),
        stats: result.stats.clone(),
    })
}
