//! Graph algorithm implementations.

pub mod bellman_ford;

#[cfg(feature = "reachability")]
pub mod reachability;
