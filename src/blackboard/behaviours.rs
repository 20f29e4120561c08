//! Behaviours that operate directly on blackboard variables.
//!
//! Usually behaviours read and write the blackboard from inside their own
//! update logic, but it can be convenient to clear, set or check a variable
//! from a dedicated node so blackboard plumbing does not get mixed into more
//! atomic behaviours.
//!
//! All three adapters take the [`Blackboard`] handle at construction and
//! share state with every other handle to the same store.

use serde_json::Value;

use super::store::Blackboard;
use crate::behaviour::Behaviour;
use crate::common::Status;

// ---------------------------------------------------------------------------
// ClearBlackboardVariable
// ---------------------------------------------------------------------------

/// Clear the specified variable from the blackboard.
///
/// Removal happens in `initialise`; `update` always reports
/// [`Status::Success`], whether or not the variable existed.
#[derive(Debug, Clone)]
pub struct ClearBlackboardVariable {
    name: String,
    blackboard: Blackboard,
    variable_name: String,
    feedback_message: String,
}

impl ClearBlackboardVariable {
    pub fn new(blackboard: Blackboard, variable_name: impl Into<String>) -> Self {
        Self {
            name: "Clear Blackboard Variable".to_string(),
            blackboard,
            variable_name: variable_name.into(),
            feedback_message: String::new(),
        }
    }

    /// Override the default behaviour name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Behaviour for ClearBlackboardVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        log::debug!("{}: clearing '{}'", self.name, self.variable_name);
        self.blackboard.unset(&self.variable_name);
    }

    fn update(&mut self) -> Status {
        self.feedback_message = "success".to_string();
        Status::Success
    }

    fn feedback_message(&self) -> &str {
        &self.feedback_message
    }
}

// ---------------------------------------------------------------------------
// SetBlackboardVariable
// ---------------------------------------------------------------------------

/// Set the specified variable on the blackboard.
///
/// The write happens in `initialise` and always overwrites any prior value;
/// `update` always reports [`Status::Success`].
#[derive(Debug, Clone)]
pub struct SetBlackboardVariable {
    name: String,
    blackboard: Blackboard,
    variable_name: String,
    variable_value: Value,
    feedback_message: String,
}

impl SetBlackboardVariable {
    pub fn new(
        blackboard: Blackboard,
        variable_name: impl Into<String>,
        variable_value: impl Into<Value>,
    ) -> Self {
        Self {
            name: "Set Blackboard Variable".to_string(),
            blackboard,
            variable_name: variable_name.into(),
            variable_value: variable_value.into(),
            feedback_message: String::new(),
        }
    }

    /// Override the default behaviour name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Behaviour for SetBlackboardVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        log::debug!("{}: setting '{}'", self.name, self.variable_name);
        self.blackboard
            .set(self.variable_name.clone(), self.variable_value.clone());
    }

    fn update(&mut self) -> Status {
        self.feedback_message = "success".to_string();
        Status::Success
    }

    fn feedback_message(&self) -> &str {
        &self.feedback_message
    }
}

// ---------------------------------------------------------------------------
// CheckBlackboardVariable
// ---------------------------------------------------------------------------

/// Check the blackboard for a specific variable and, optionally, whether
/// that variable holds a specific value.
///
/// A pure predicate: it never writes the store and never reports
/// [`Status::Running`]. The check is re-evaluated on every `update`, so a
/// variable set later in the same tick by an upstream node is seen on the
/// next evaluation.
///
/// Without an expected value the check is presence-only. `invert` swaps the
/// equality verdict; it does not flip the presence test — an absent variable
/// is a [`Status::Failure`] either way.
#[derive(Debug, Clone)]
pub struct CheckBlackboardVariable {
    name: String,
    blackboard: Blackboard,
    variable_name: String,
    expected_value: Option<Value>,
    invert: bool,
    feedback_message: String,
}

impl CheckBlackboardVariable {
    pub fn new(blackboard: Blackboard, variable_name: impl Into<String>) -> Self {
        Self {
            name: "Check Blackboard Variable".to_string(),
            blackboard,
            variable_name: variable_name.into(),
            expected_value: None,
            invert: false,
            feedback_message: String::new(),
        }
    }

    /// Override the default behaviour name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Require the variable to equal `expected_value` rather than merely
    /// exist. Comparison is total: values of different kinds are unequal.
    pub fn with_expected_value(mut self, expected_value: impl Into<Value>) -> Self {
        self.expected_value = Some(expected_value.into());
        self
    }

    /// Succeed when the value does *not* match the expected value.
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

impl Behaviour for CheckBlackboardVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        // existence failure check
        let value = match self.blackboard.get(&self.variable_name) {
            Some(value) => value,
            None => {
                self.feedback_message =
                    format!("blackboard variable '{}' did not exist", self.variable_name);
                return Status::Failure;
            }
        };

        // if existence check required only
        let expected_value = match &self.expected_value {
            Some(expected_value) => expected_value,
            None => {
                self.feedback_message = format!(
                    "'{}' exists on the blackboard (as required)",
                    self.variable_name
                );
                return Status::Success;
            }
        };

        // expected value matching
        let matched_expected = value == *expected_value;

        match (matched_expected, self.invert) {
            (true, false) => {
                self.feedback_message = format!(
                    "'{}' matched expected value (as required) [v: {}][e: {}]",
                    self.variable_name, value, expected_value
                );
                Status::Success
            }
            (false, false) => {
                self.feedback_message = format!(
                    "'{}' did not match expected value (required otherwise) [v: {}][e: {}]",
                    self.variable_name, value, expected_value
                );
                Status::Failure
            }
            (false, true) => {
                self.feedback_message = format!(
                    "'{}' did not match expected value (as required) [v: {}][e: {}]",
                    self.variable_name, value, expected_value
                );
                Status::Success
            }
            (true, true) => {
                self.feedback_message = format!(
                    "'{}' matched expected value (required otherwise) [v: {}][e: {}]",
                    self.variable_name, value, expected_value
                );
                Status::Failure
            }
        }
    }

    fn feedback_message(&self) -> &str {
        &self.feedback_message
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
