//! Heft - a tree command that shows where your disk space went

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{OutputConfig, TreeFormatter, format_percent, format_size};
pub use tree::{Node, SizeMode, SortOrder, TreeWalker, WalkerConfig};
