//! Resumable payload traversal
//!
//! # Architecture
//!
//! - `node`: one array or carrier position and its cursor
//! - `stack`: depth-indexed stack standing in for the call stack
//! - `engine`: the depth-first walk that feeds the format cache
//!
//! Visiting order is document order: every element of an array is resolved
//! together with its whole subtree before the next element is looked at.

pub mod engine;
pub mod node;
pub mod stack;

pub use engine::{Advance, TraversalEngine, TraversalStats, drain};
pub use node::TraversalNode;
pub use stack::ResumableStack;
