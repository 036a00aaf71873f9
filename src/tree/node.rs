//! In-memory tree of sized filesystem entries

/// One filesystem object: the root, a file, or a directory.
///
/// Built once by the walker and only reordered (never regrown) by the
/// renderer afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Basename of the entry, or the path exactly as given for the root.
    pub name: String,
    /// Aggregated size in bytes. A file carries its own metric; a
    /// directory carries the sum of its children, fixed at the moment
    /// the walk finalizes the node.
    pub size: u64,
    pub is_dir: bool,
    /// True if this entry or any descendant failed to stat or list.
    /// Never cleared once set.
    pub has_error: bool,
    /// Children in build order; the renderer sorts in place for display.
    pub children: Vec<Node>,
}

impl Node {
    /// A plain file with an already-measured size.
    pub fn leaf(name: String, size: u64) -> Self {
        Self {
            name,
            size,
            is_dir: false,
            has_error: false,
            children: Vec::new(),
        }
    }

    /// An empty directory node, to be filled and finalized by the walker.
    pub fn dir(name: String) -> Self {
        Self {
            name,
            size: 0,
            is_dir: true,
            has_error: false,
            children: Vec::new(),
        }
    }
}
