//! Reporter - renders scan results to a terminal or a string

use std::io;

use termcolor::{ColorChoice, NoColor, StandardStream};

use crate::tree::{ExtensionTotals, TreeNode};

use super::config::OutputConfig;

/// Renders trees and summary tables.
///
/// Rendering goes through `render_tree` / `render_summary`, which accept any
/// `WriteColor`. `print_*` target stdout and `format_*` return plain text.
pub struct Reporter {
    config: OutputConfig,
}

impl Reporter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn color_choice(&self) -> ColorChoice {
        if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }

    pub fn print_tree(&self, root: &TreeNode) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice());
        self.render_tree(root, &mut stdout)
    }

    pub fn print_summary(&self, totals: &ExtensionTotals) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice());
        self.render_summary(totals, &mut stdout)
    }

    pub fn format_tree(&self, root: &TreeNode) -> String {
        render_plain(|out| self.render_tree(root, out))
    }

    pub fn format_summary(&self, totals: &ExtensionTotals) -> String {
        render_plain(|out| self.render_summary(totals, out))
    }
}

/// Run a renderer against an in-memory, colorless buffer.
fn render_plain<F>(render: F) -> String
where
    F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
{
    let mut out = NoColor::new(Vec::new());
    // Writes into a Vec cannot fail.
    let _ = render(&mut out);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}
