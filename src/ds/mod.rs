//! Internal data structures.

pub mod recency_stack;

pub use recency_stack::RecencyStack;
