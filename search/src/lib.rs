//! Wayfinder Search: interchangeable state-space search strategies over an
//! abstract problem interface.
//!
//! The engine knows nothing about any domain. A domain implements
//! [`problem::Problem`] and hands itself to a driver; the driver owns the
//! frontier, the visited set, and the path bookkeeping for exactly one
//! invocation.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder-search  ←  wayfinder-harness
//! (engine)             (worlds, runner, demo)
//! ```
//!
//! # Key types
//!
//! - [`problem::Problem`] — the capability contract a domain implements
//! - [`frontier::Frontier`] — ordering policies: LIFO, FIFO, min-priority
//! - [`search::SearchResult`] — plan plus run statistics with an explicit
//!   termination reason (exhaustion is a result, never an error)
//! - [`heuristic::Heuristic`] — estimate contract; the zero default degrades
//!   A* to uniform-cost search
//! - [`graph::graph_search`] — the strategy-neutral skeleton shared by all
//!   drivers, parameterized by frontier policy

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod problem;
pub mod search;
