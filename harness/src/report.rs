//! Run report artifact: what a harness run did, rendered to JSON.
//!
//! The report is the harness's observable surface: the strategy that ran,
//! the plan (actions and the states they visit), its cost, and the engine
//! counters. `write_to_dir` persists it as a single JSON file for offline
//! inspection.

use std::path::{Path, PathBuf};

use wayfinder_search::problem::Cost;
use wayfinder_search::search::SearchStats;

/// Filename used by [`RunReport::write_to_dir`].
pub const REPORT_FILENAME: &str = "run_report.json";

/// The outcome of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Short name of the driver that ran.
    pub strategy: &'static str,
    /// Rendered plan actions; empty when the search exhausted.
    pub actions: Vec<String>,
    /// Rendered states the plan visits, start included; empty when the
    /// search exhausted.
    pub states: Vec<String>,
    /// Summed plan cost; `None` when the search exhausted.
    pub cost: Option<Cost>,
    /// Engine counters for the run.
    pub stats: SearchStats,
}

impl RunReport {
    /// True if the run found a plan.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.cost.is_some()
    }

    /// Render the report as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let plan = match self.cost {
            Some(cost) => serde_json::json!({
                "actions": self.actions,
                "states": self.states,
                "cost": cost,
            }),
            None => serde_json::Value::Null,
        };
        serde_json::json!({
            "strategy": self.strategy,
            "solved": self.solved(),
            "plan": plan,
            "stats": self.stats.to_json(),
        })
    }

    /// Write the report as pretty-printed JSON into `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportWriteError::Render`] when JSON rendering fails and
    /// [`ReportWriteError::Io`] when the file cannot be written.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ReportWriteError> {
        let path = dir.join(REPORT_FILENAME);
        let rendered = serde_json::to_vec_pretty(&self.to_json()).map_err(|e| {
            ReportWriteError::Render {
                detail: e.to_string(),
            }
        })?;
        std::fs::write(&path, rendered).map_err(|e| ReportWriteError::Io {
            detail: e.to_string(),
        })?;
        Ok(path)
    }
}

/// Error writing a report file.
#[derive(Debug)]
pub enum ReportWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// JSON rendering failed.
    Render { detail: String },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Render { detail } => write!(f, "JSON rendering error: {detail}"),
        }
    }
}

impl std::error::Error for ReportWriteError {}
