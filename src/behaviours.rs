//! Trivial leaf behaviours.
//!
//! Corresponds to `py_trees/behaviours.py`. The blackboard adapters in
//! [`blackboard::behaviours`](crate::blackboard::behaviours) follow the same
//! shape as [`Success`]: do the work in `initialise`, report in `update`.

use crate::behaviour::Behaviour;
use crate::common::Status;

/// A behaviour that always succeeds.
#[derive(Debug, Clone)]
pub struct Success {
    name: String,
    feedback_message: String,
}

impl Success {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feedback_message: String::new(),
        }
    }
}

impl Default for Success {
    fn default() -> Self {
        Self::new("Success")
    }
}

impl Behaviour for Success {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        self.feedback_message = "success".to_string();
        Status::Success
    }

    fn feedback_message(&self) -> &str {
        &self.feedback_message
    }
}

/// A behaviour that always fails.
#[derive(Debug, Clone)]
pub struct Failure {
    name: String,
    feedback_message: String,
}

impl Failure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feedback_message: String::new(),
        }
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self::new("Failure")
    }
}

impl Behaviour for Failure {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        self.feedback_message = "failure".to_string();
        Status::Failure
    }

    fn feedback_message(&self) -> &str {
        &self.feedback_message
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_behaviour() {
        let mut behaviour = Success::default();
        behaviour.initialise();
        assert_eq!(behaviour.update(), Status::Success);
        assert_eq!(behaviour.feedback_message(), "success");
        assert_eq!(behaviour.name(), "Success");
    }

    #[test]
    fn test_failure_behaviour() {
        let mut behaviour = Failure::new("Doomed");
        behaviour.initialise();
        assert_eq!(behaviour.update(), Status::Failure);
        assert_eq!(behaviour.name(), "Doomed");
    }
}
