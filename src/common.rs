//! Common types shared across the behaviour tree crate.
//!
//! Corresponds to `py_trees/common.py`.

use serde::{Deserialize, Serialize};

/// Tri-state outcome of a behaviour evaluation.
///
/// Returned by [`Behaviour::update`](crate::behaviour::Behaviour::update)
/// every tick. Composite nodes in the owning tree engine interpret these
/// to decide traversal; this crate only produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The behaviour achieved its goal this tick.
    Success,
    /// The behaviour cannot achieve its goal.
    Failure,
    /// The behaviour needs more ticks to reach a verdict.
    Running,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
            Status::Running => "RUNNING",
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
