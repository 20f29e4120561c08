//! # py_trees - Rust Port
//!
//! A Rust port of the py_trees Python behaviour tree framework, covering the
//! blackboard core: the shared data store behaviours use to coordinate, plus
//! the leaf behaviours that clear, set and check blackboard variables.
//!
//! Tree assembly, composites and tick scheduling belong to the owning engine;
//! this crate provides the [`Behaviour`] contract those engines drive and the
//! [`Blackboard`] state they share.

pub mod behaviour;
pub mod behaviours;
pub mod blackboard;
pub mod common;

// Re-exports matching Python's __init__.py surface
pub use behaviour::Behaviour;
pub use blackboard::{
    Blackboard, BlackboardError, CheckBlackboardVariable, ClearBlackboardVariable,
    SetBlackboardVariable,
};
pub use common::Status;

/// Library version.
pub const VERSION: &str = "0.3.0";
