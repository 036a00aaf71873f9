//! Recursive tree renderer
//!
//! Walks the size tree depth-first, sorting each directory's children
//! in place immediately before printing them, and draws the branch
//! prefixes from an explicit ancestor last-sibling stack.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::Node;

use super::config::OutputConfig;
use super::units::{format_percent, format_size};

/// Per-render state fixed before recursion starts.
struct RenderState {
    /// Denominator for percentage mode, captured from the root.
    root_size: u64,
    /// The error column only exists when the root itself is flagged.
    mark_errors: bool,
}

/// Formatter for the size tree.
///
/// `format` renders to a plain `String`; `print` writes the same
/// layout to stdout with colors. Both reorder children in place, so
/// repeated renders under the same options produce identical text.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, root: &mut Node) -> String {
        let mut output = String::new();
        let state = RenderState {
            root_size: root.size,
            mark_errors: root.has_error,
        };
        let mut ancestors = Vec::new();
        self.format_node(root, &mut output, &mut ancestors, 0, true, &state);
        output
    }

    pub fn print(&self, root: &mut Node) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let state = RenderState {
            root_size: root.size,
            mark_errors: root.has_error,
        };
        let mut ancestors = Vec::new();
        self.print_node(root, &mut stdout, &mut ancestors, 0, true, &state)
    }

    fn size_column(&self, node: &Node, state: &RenderState) -> String {
        if self.config.percent {
            format_percent(node.size, state.root_size)
        } else {
            format_size(node.size)
        }
    }

    /// One four-character segment per ancestor below the root, then the
    /// node's own connector. The root line carries neither.
    fn branch_prefix(ancestors: &[bool], depth: usize, is_last: bool) -> String {
        let mut prefix = String::with_capacity(depth * 4);
        for &ancestor_was_last in ancestors {
            prefix.push_str(if ancestor_was_last { "    " } else { "|   " });
        }
        if depth > 0 {
            prefix.push_str(if is_last { "\\-- " } else { "|-- " });
        }
        prefix
    }

    fn descend(&self, depth: usize) -> bool {
        self.config.max_depth.is_none_or(|max| depth < max)
    }

    fn format_node(
        &self,
        node: &mut Node,
        output: &mut String,
        ancestors: &mut Vec<bool>,
        depth: usize,
        is_last: bool,
        state: &RenderState,
    ) {
        if state.mark_errors {
            output.push_str(if node.has_error { "? " } else { "  " });
        }
        output.push_str(&self.size_column(node, state));
        output.push_str(&Self::branch_prefix(ancestors, depth, is_last));
        output.push_str(&node.name);
        output.push_str(" \n");

        if node.is_dir && self.descend(depth) {
            self.config.sort.sort(&mut node.children);
            let count = node.children.len();
            if depth > 0 {
                ancestors.push(is_last);
            }
            for (i, child) in node.children.iter_mut().enumerate() {
                self.format_node(child, output, ancestors, depth + 1, i + 1 == count, state);
            }
            if depth > 0 {
                ancestors.pop();
            }
        }
    }

    fn print_node(
        &self,
        node: &mut Node,
        stdout: &mut StandardStream,
        ancestors: &mut Vec<bool>,
        depth: usize,
        is_last: bool,
        state: &RenderState,
    ) -> io::Result<()> {
        if state.mark_errors {
            if node.has_error {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(stdout, "? ")?;
                stdout.reset()?;
            } else {
                write!(stdout, "  ")?;
            }
        }
        write!(stdout, "{}", self.size_column(node, state))?;
        write!(stdout, "{}", Self::branch_prefix(ancestors, depth, is_last))?;
        if node.is_dir {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(stdout, "{}", node.name)?;
        stdout.reset()?;
        writeln!(stdout, " ")?;

        if node.is_dir && self.descend(depth) {
            self.config.sort.sort(&mut node.children);
            let count = node.children.len();
            if depth > 0 {
                ancestors.push(is_last);
            }
            for (i, child) in node.children.iter_mut().enumerate() {
                self.print_node(child, stdout, ancestors, depth + 1, i + 1 == count, state)?;
            }
            if depth > 0 {
                ancestors.pop();
            }
        }
        Ok(())
    }
}
