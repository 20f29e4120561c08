//! Blackboard — the shared key/value store behind every handle.
//!
//! Corresponds to the `Blackboard` borg in `py_trees/blackboard.py`. The
//! Python original shares state implicitly through a class-level dict; here
//! the sharing is explicit: [`Blackboard`] is a cheap clone handle and every
//! clone aliases the same underlying map. Behaviours receive the handle at
//! construction instead of reaching for a process-wide static.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors from typed blackboard access.
///
/// The plain string/`Value` operations never fail on absent keys or odd
/// values; only the opt-in typed accessor can report an error.
#[derive(Debug, Error)]
pub enum BlackboardError {
    /// The stored value could not be deserialized into the requested type.
    #[error("blackboard variable '{name}' could not be deserialized: {source}")]
    Deserialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Shared data store for behaviours in a tree.
///
/// Values are [`serde_json::Value`] — a tagged union over the payload kinds
/// behaviours exchange (null, bool, number, string, array, object). Equality
/// between values is total: values of different kinds simply compare unequal,
/// they never panic.
///
/// Cloning the handle never copies the data; mutations through any handle are
/// immediately visible through every other handle. The interior lock keeps
/// the store sound if multiple trees tick from different threads; under a
/// single cooperative tick loop it is uncontended.
///
/// # Example
///
/// ```
/// use py_trees::blackboard::Blackboard;
///
/// let blackboard = Blackboard::new();
/// blackboard.set("battery_level", 42);
///
/// let reader = blackboard.clone();
/// assert_eq!(reader.get("battery_level"), Some(serde_json::json!(42)));
/// ```
#[derive(Debug, Clone)]
pub struct Blackboard {
    vars: Arc<RwLock<HashMap<String, Value>>>,
}

impl Default for Blackboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Blackboard {
    /// Create a new, empty blackboard.
    pub fn new() -> Self {
        Self {
            vars: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // --- Write operations ---

    /// Set a variable, inserting or replacing. Always returns `true`.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> bool {
        self.set_with_overwrite(name, value, true)
    }

    /// Set a variable with an explicit overwrite policy.
    ///
    /// With `overwrite = false`, an existing variable is left untouched and
    /// the call returns `false`; otherwise the value is stored and the call
    /// returns `true`.
    pub fn set_with_overwrite(
        &self,
        name: impl Into<String>,
        value: impl Into<Value>,
        overwrite: bool,
    ) -> bool {
        let name = name.into();
        let mut vars = self.vars.write();
        if !overwrite && vars.contains_key(&name) {
            log::debug!("Blackboard: '{}' already exists, not overwriting", name);
            return false;
        }
        log::trace!("Blackboard: set '{}'", name);
        vars.insert(name, value.into());
        true
    }

    /// Remove a variable. Idempotent — removing an absent variable is not
    /// an error. Returns whether the variable was present.
    pub fn unset(&self, name: &str) -> bool {
        let removed = self.vars.write().remove(name).is_some();
        if removed {
            log::trace!("Blackboard: unset '{}'", name);
        }
        removed
    }

    // --- Read operations ---

    /// Get a variable's value.
    ///
    /// `None` means the variable is absent. A variable explicitly set to
    /// null comes back as `Some(Value::Null)` — the two states are never
    /// conflated.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.vars.read().get(name).cloned()
    }

    /// Get a variable's value, or `default` when absent.
    pub fn get_or(&self, name: &str, default: Value) -> Value {
        self.get(name).unwrap_or(default)
    }

    /// Get a variable deserialized into a concrete type.
    ///
    /// Returns `Ok(None)` when the variable is absent and an error when the
    /// stored value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, BlackboardError> {
        match self.get(name) {
            Some(value) => serde_json::from_value(value).map(Some).map_err(|source| {
                BlackboardError::Deserialize {
                    name: name.to_string(),
                    source,
                }
            }),
            None => Ok(None),
        }
    }

    /// Pure membership test.
    pub fn exists(&self, name: &str) -> bool {
        self.vars.read().contains_key(name)
    }

    // --- Introspection ---

    /// Number of variables on the blackboard.
    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    /// Check if the blackboard holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.read().is_empty()
    }

    /// Snapshot of the variable names, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.vars.read().keys().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blackboard_set_get() {
        let blackboard = Blackboard::new();
        assert!(blackboard.set("foo", "bar"));
        assert_eq!(blackboard.get("foo"), Some(json!("bar")));
        assert_eq!(blackboard.len(), 1);
    }

    #[test]
    fn test_blackboard_set_replaces() {
        let blackboard = Blackboard::new();
        blackboard.set("foo", 1);
        blackboard.set("foo", 2);
        assert_eq!(blackboard.get("foo"), Some(json!(2)));
        assert_eq!(blackboard.len(), 1);
    }

    #[test]
    fn test_blackboard_no_overwrite() {
        let blackboard = Blackboard::new();
        blackboard.set("foo", "first");
        assert!(!blackboard.set_with_overwrite("foo", "second", false));
        assert_eq!(blackboard.get("foo"), Some(json!("first")));

        // Absent key: no-overwrite set still inserts
        assert!(blackboard.set_with_overwrite("bar", "value", false));
        assert_eq!(blackboard.get("bar"), Some(json!("value")));
    }

    #[test]
    fn test_blackboard_unset_idempotent() {
        let blackboard = Blackboard::new();
        blackboard.set("foo", 1);
        assert!(blackboard.unset("foo"));
        assert!(!blackboard.exists("foo"));
        assert!(!blackboard.unset("foo"));
        assert!(!blackboard.unset("never_existed"));
    }

    #[test]
    fn test_blackboard_absent_vs_null() {
        let blackboard = Blackboard::new();
        assert_eq!(blackboard.get("ghost"), None);
        assert!(!blackboard.exists("ghost"));

        blackboard.set("ghost", Value::Null);
        assert_eq!(blackboard.get("ghost"), Some(Value::Null));
        assert!(blackboard.exists("ghost"));
    }

    #[test]
    fn test_blackboard_get_or() {
        let blackboard = Blackboard::new();
        assert_eq!(blackboard.get_or("missing", json!("fallback")), json!("fallback"));
        blackboard.set("present", 7);
        assert_eq!(blackboard.get_or("present", json!("fallback")), json!(7));
    }

    #[test]
    fn test_blackboard_get_as() {
        let blackboard = Blackboard::new();
        blackboard.set("count", 42);

        let count: Option<u32> = blackboard.get_as("count").unwrap();
        assert_eq!(count, Some(42));

        let absent: Option<u32> = blackboard.get_as("missing").unwrap();
        assert_eq!(absent, None);

        let mismatch: Result<Option<String>, _> = blackboard.get_as("count");
        assert!(mismatch.is_err());
    }

    #[test]
    fn test_blackboard_shared_handles() {
        let writer = Blackboard::new();
        let reader = writer.clone();

        writer.set("battery_level", 42);
        assert_eq!(reader.get("battery_level"), Some(json!(42)));

        reader.unset("battery_level");
        assert!(!writer.exists("battery_level"));
    }

    #[test]
    fn test_blackboard_keys() {
        let blackboard = Blackboard::new();
        assert!(blackboard.is_empty());
        blackboard.set("a", 1);
        blackboard.set("b", 2);

        let mut keys = blackboard.keys();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
