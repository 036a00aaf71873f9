//! Directory walking and size aggregation
//!
//! This module builds the in-memory size tree for a path:
//!
//! - `Node`: one filesystem entry with its aggregated size
//! - `TreeWalker`: recursive walker that sums sizes bottom-up
//! - `SortOrder` and the sibling comparators used at render time

mod config;
mod node;
mod order;
mod walker;

// Re-export public types
pub use config::{BLOCK_SIZE, SizeMode, WalkerConfig};
pub use node::Node;
pub use order::{SortOrder, name_order, size_order};
pub use walker::TreeWalker;
