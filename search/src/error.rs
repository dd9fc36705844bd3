//! Typed search errors.
//!
//! `SearchError` covers contract violations surfaced to the caller. Frontier
//! exhaustion is NOT an error; it is reported through
//! [`crate::search::TerminationReason`] so callers can tell "no solution
//! exists" apart from an engine fault.

/// Typed failure for operations on the problem surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An action sequence requested a transition that `expand` does not
    /// report from the state reached at that point in the replay.
    IllegalAction { at_step: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalAction { at_step } => {
                write!(f, "action at step {at_step} is not a legal transition")
            }
        }
    }
}

impl std::error::Error for SearchError {}
