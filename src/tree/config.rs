//! Configuration types for the directory walker

use std::fs::Metadata;

/// Bytes per allocated block, matching the POSIX `st_blocks` unit.
pub const BLOCK_SIZE: u64 = 512;

/// Which size metric a walk records for each entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeMode {
    /// Blocks actually allocated on disk, `BLOCK_SIZE` bytes each.
    #[default]
    Blocks,
    /// Apparent byte length reported by the filesystem.
    Apparent,
}

impl SizeMode {
    /// Size of a single filesystem object under this mode.
    pub fn measure(self, metadata: &Metadata) -> u64 {
        match self {
            SizeMode::Apparent => metadata.len(),
            SizeMode::Blocks => allocated_size(metadata),
        }
    }
}

#[cfg(unix)]
fn allocated_size(metadata: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.blocks() * BLOCK_SIZE
}

// Block counts are not exposed off unix; fall back to the apparent length.
#[cfg(not(unix))]
fn allocated_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub size_mode: SizeMode,
}
