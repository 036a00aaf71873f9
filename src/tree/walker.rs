//! TreeWalker - builds the size tree in memory

use std::fs;
use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::node::Node;

/// Recursive directory walker.
///
/// Builds the whole tree in one synchronous depth-first pass, summing
/// directory sizes bottom-up. Per-entry failures degrade into the
/// `has_error` flag on the enclosing directory; only a root that
/// cannot be stat'ed at all is reported as an error.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `path` and return its fully aggregated subtree.
    ///
    /// The root is stat'ed with `fs::metadata`, so a symlink named
    /// explicitly on the command line is followed. A root that cannot
    /// be stat'ed, or that is neither a regular file nor a directory,
    /// is a fatal error.
    pub fn walk(&self, path: &Path) -> io::Result<Node> {
        let metadata = fs::metadata(path)?;
        let name = path.display().to_string();

        if metadata.is_file() {
            return Ok(Node::leaf(name, self.config.size_mode.measure(&metadata)));
        }
        if metadata.is_dir() {
            return Ok(self.walk_dir(path, name, self.config.size_mode.measure(&metadata)));
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file or directory",
        ))
    }

    /// Build one directory node, recursing into subdirectories.
    ///
    /// `stat_size` is the directory's own stat-derived size; it only
    /// survives as a best-effort baseline when the listing cannot be
    /// opened. Otherwise the node's size is the sum of its children,
    /// assigned once when the node is finalized.
    fn walk_dir(&self, path: &Path, name: String, stat_size: u64) -> Node {
        let mut node = Node::dir(name);

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(_) => {
                node.has_error = true;
                node.size = stat_size;
                return node;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => {
                    node.has_error = true;
                    continue;
                }
            };
            let entry_path = entry.path();

            // symlink_metadata so links are seen as links, not followed
            let metadata = match fs::symlink_metadata(&entry_path) {
                Ok(metadata) => metadata,
                Err(_) => {
                    node.has_error = true;
                    continue;
                }
            };
            let entry_name = entry.file_name().to_string_lossy().into_owned();
            let file_type = metadata.file_type();

            if file_type.is_file() {
                node.children
                    .push(Node::leaf(entry_name, self.config.size_mode.measure(&metadata)));
            } else if file_type.is_dir() {
                let child =
                    self.walk_dir(&entry_path, entry_name, self.config.size_mode.measure(&metadata));
                if child.has_error {
                    node.has_error = true;
                }
                node.children.push(child);
            }
            // Symlinks, devices, sockets and fifos are dropped entirely:
            // they contribute no size and no error state.
        }

        node.size = node.children.iter().map(|child| child.size).sum();
        node
    }
}
