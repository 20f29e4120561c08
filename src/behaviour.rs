//! The tick-behaviour contract implemented by every tree node.
//!
//! Corresponds to `py_trees/behaviour.py`, reduced to the initialise/update
//! lifecycle the blackboard adapters need. Tree traversal, composites and
//! tick scheduling belong to the owning engine, not this crate.

use crate::common::Status;

/// A behaviour tree leaf node.
///
/// The owning engine constructs the behaviour with its configuration, calls
/// [`initialise`](Behaviour::initialise) when the node is first entered, then
/// calls [`update`](Behaviour::update) once per tick until the returned
/// [`Status`] stops being [`Status::Running`].
///
/// The [`feedback_message`](Behaviour::feedback_message) is a human-readable
/// explanation of the last verdict. It is diagnostic only — engines must
/// never branch on it.
pub trait Behaviour: Send {
    /// Human-readable behaviour name (used in logs and tree dumps).
    fn name(&self) -> &str;

    /// Called once when the node is entered, before the first update.
    fn initialise(&mut self) {
        // Default: no-op
    }

    /// Evaluate the behaviour for this tick.
    fn update(&mut self) -> Status;

    /// Explanation of the most recent verdict.
    fn feedback_message(&self) -> &str;
}
