//! Output configuration types

use crate::tree::SortOrder;

/// Configuration for rendering the size tree.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Sibling ordering applied at each directory before printing.
    pub sort: SortOrder,
    /// Print each entry as a percentage of the root size instead of units.
    pub percent: bool,
    /// Deepest level to print, counted from the root at depth 0.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}
