//! Tree diagram formatter
//!
//! This module provides `TreeFormatter` which renders a complete `TreeNode`
//! tree into an indented diagram, either as a string or printed with colors.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;

/// Line emitted in place of entries when the root has no visible children.
pub const EMPTY_TREE_MESSAGE: &str = "(No files or directories found)";

/// One rendered entry below the header.
struct DiagramLine<'a> {
    /// Ancestor padding followed by the connector.
    lead: String,
    node: &'a TreeNode,
}

/// Formatter for tree diagrams.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the diagram as newline-joined lines with no trailing newline.
    pub fn format(&self, root: &TreeNode) -> String {
        let mut lines = vec![self.header(root)];
        let entries = self.collect_lines(root);
        if entries.is_empty() {
            lines.push(EMPTY_TREE_MESSAGE.to_string());
        }
        for line in &entries {
            lines.push(format!("{}{}", line.lead, self.label(line.node)));
        }
        lines.join("\n")
    }

    /// Print the diagram to stdout, coloring directories when enabled.
    pub fn print(&self, root: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(&mut stdout, root)
    }

    /// Write the diagram to any color-capable writer.
    pub fn write_colored<W: WriteColor>(&self, out: &mut W, root: &TreeNode) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "{}", self.header(root))?;
        out.reset()?;

        let entries = self.collect_lines(root);
        if entries.is_empty() {
            writeln!(out, "{}", EMPTY_TREE_MESSAGE)?;
            return Ok(());
        }

        for line in &entries {
            write!(out, "{}", line.lead)?;
            if line.node.is_dir() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            writeln!(out, "{}", self.label(line.node))?;
            out.reset()?;
        }
        Ok(())
    }

    fn header(&self, root: &TreeNode) -> String {
        format!("{}root: {}", self.config.root_marker(), root.path().display())
    }

    fn label(&self, node: &TreeNode) -> String {
        if node.is_dir() {
            format!("{}{}/", self.config.dir_glyph(), node.name())
        } else {
            format!("{}{}", self.config.file_glyph(), node.name())
        }
    }

    fn collect_lines<'a>(&self, root: &'a TreeNode) -> Vec<DiagramLine<'a>> {
        let mut lines = Vec::new();
        Self::collect_children(root.children(), "", &mut lines);
        lines
    }

    fn collect_children<'a>(
        children: &'a [TreeNode],
        prefix: &str,
        lines: &mut Vec<DiagramLine<'a>>,
    ) {
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(DiagramLine {
                lead: format!("{}{}", prefix, connector),
                node: child,
            });

            if child.is_dir() {
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                Self::collect_children(child.children(), &child_prefix, lines);
            }
        }
    }
}
