//! Blackboard — shared data storage for behaviours.
//!
//! Corresponds to `py_trees/blackboard.py`.
//!
//! The blackboard is a key/value namespace shared by every behaviour in a
//! tree: one behaviour writes a variable, another reads it on a later (or
//! the same) tick, with the owning engine's traversal order deciding who
//! sees what first. There is one logical store per tree; every
//! [`Blackboard`] handle cloned from it aliases the same state.
//!
//! # Handles, not globals
//!
//! The Python original shares state through a borg class attribute, so any
//! `Blackboard()` constructed anywhere in the process aliases the same
//! dict. Here the aliasing is explicit instead: construct one [`Blackboard`]
//! per tree and clone the handle into each behaviour that needs it. Tests
//! and multiple trees in one process stay isolated for free.
//!
//! # Adapter behaviours
//!
//! Three leaf behaviours drive the store without custom code:
//! [`ClearBlackboardVariable`], [`SetBlackboardVariable`] and
//! [`CheckBlackboardVariable`].

pub mod behaviours;
pub mod store;

pub use behaviours::{CheckBlackboardVariable, ClearBlackboardVariable, SetBlackboardVariable};
pub use store::{Blackboard, BlackboardError};
