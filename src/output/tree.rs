//! Tree formatter for buffered output
//!
//! Renders a [`Tree`] with box-drawing connectors, either into a string or
//! straight to stdout with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Node, PreOrder, Tree};

use super::config::OutputConfig;
use super::utils::{child_prefix, connector, format_size};

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::new();
        let (folder_count, file_count) = self.format_node(tree.root(), &mut output, "", true, true);
        output.push_str(&format!(
            "\n{} folders, {} files\n",
            folder_count, file_count
        ));
        output
    }

    pub fn print(&self, tree: &Tree) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let (folder_count, file_count) =
            self.print_node(tree.root(), &mut stdout, "", true, true)?;
        writeln!(stdout)?;
        writeln!(stdout, "{} folders, {} files", folder_count, file_count)?;
        Ok(())
    }

    /// Size annotation for a node, or `None` when sizes are hidden.
    fn size_label(&self, node: &Node) -> Option<String> {
        if !self.config.show_size {
            return None;
        }
        let bytes = match node.size() {
            Some(size) => size,
            // Prefer the memoized total; fall back to a read-only sum.
            None => node
                .cached_size()
                .unwrap_or_else(|| PreOrder::new(node).filter_map(|v| v.node.size()).sum()),
        };
        Some(format_size(bytes))
    }

    fn format_node(
        &self,
        node: &Node,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> (usize, usize) {
        if !is_root {
            output.push_str(prefix);
            output.push_str(connector(is_last));
        }
        output.push_str(node.name());
        if let Some(label) = self.size_label(node) {
            output.push_str(&format!(" ({})", label));
        }
        output.push('\n');

        if node.is_file() {
            return (0, 1);
        }

        let new_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };

        let mut folder_count = 0;
        let mut file_count = 0;
        let children = node.children();

        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            let (d, f) = self.format_node(child, output, &new_prefix, child_is_last, false);
            folder_count += d;
            file_count += f;
            if child.is_folder() {
                folder_count += 1;
            }
        }

        (folder_count, file_count)
    }

    fn print_node(
        &self,
        node: &Node,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<(usize, usize)> {
        if !is_root {
            write!(stdout, "{}{}", prefix, connector(is_last))?;
        }

        if node.is_folder() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(stdout, "{}", node.name())?;
        stdout.reset()?;

        if let Some(label) = self.size_label(node) {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(stdout, " ({})", label)?;
            stdout.reset()?;
        }
        writeln!(stdout)?;

        if node.is_file() {
            return Ok((0, 1));
        }

        let new_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };

        let mut folder_count = 0;
        let mut file_count = 0;
        let children = node.children();

        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            let (d, f) = self.print_node(child, stdout, &new_prefix, child_is_last, false)?;
            folder_count += d;
            file_count += f;
            if child.is_folder() {
                folder_count += 1;
            }
        }

        Ok((folder_count, file_count))
    }
}
