//! Tree formatting and display
//!
//! This module turns a walked size tree into text:
//!
//! - `config` - Output configuration types
//! - `units` - Human-readable size and percentage formatting
//! - `tree` - Recursive tree renderer (plain string or colored stdout)

mod config;
mod tree;
mod units;

// Re-export public types and functions
pub use config::OutputConfig;
pub use tree::TreeFormatter;
pub use units::{Unit, format_percent, format_size, truncate1};
