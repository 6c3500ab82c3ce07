//! Size-annotated tree rendering
//!
//! Files are labeled `name (size)` in their severity color; directories show
//! a bold name followed by their size when one is known.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{Severity, TreeNode};

use super::reporter::Reporter;
use super::utils::human_readable;

impl Reporter {
    /// Render the tree followed by a directory/file count footer.
    pub fn render_tree<W: WriteColor>(&self, root: &TreeNode, out: &mut W) -> io::Result<()> {
        let (dir_count, file_count) = self.render_node(root, out, "", true, true)?;
        writeln!(out)?;
        writeln!(out, "{} directories, {} files", dir_count, file_count)?;
        Ok(())
    }

    fn render_node<W: WriteColor>(
        &self,
        node: &TreeNode,
        out: &mut W,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<(usize, usize)> {
        if !is_root {
            let connector = if is_last { "└── " } else { "├── " };
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
            write!(out, "{}{}", prefix, connector)?;
            out.reset()?;
        }

        match node {
            TreeNode::File { size_bytes, .. } => {
                out.set_color(&severity_spec(Severity::classify(*size_bytes)))?;
                write!(out, "{}", node.label())?;
                out.reset()?;
                writeln!(out)?;
                Ok((0, 1))
            }
            TreeNode::Dir {
                name,
                size_bytes,
                children,
                ..
            } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", name)?;
                out.reset()?;
                if let Some(size) = size_bytes {
                    write!(out, " ")?;
                    out.set_color(&severity_spec(Severity::classify(*size)))?;
                    write!(out, "({})", human_readable(*size))?;
                    out.reset()?;
                }
                writeln!(out)?;

                let new_prefix = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };

                let mut dir_count = 0;
                let mut file_count = 0;
                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    let (d, f) = self.render_node(child, out, &new_prefix, child_is_last, false)?;
                    dir_count += d;
                    file_count += f;
                    if child.is_dir() {
                        dir_count += 1;
                    }
                }
                Ok((dir_count, file_count))
            }
        }
    }
}

pub(super) fn severity_spec(severity: Severity) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(severity.color()));
    spec
}
