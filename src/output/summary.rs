//! Per-extension summary table

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{ExtensionTotals, Severity};

use super::reporter::Reporter;
use super::tree::severity_spec;
use super::utils::human_readable;

const TITLE: &str = "Disk Usage by File Type";
const EXTENSION_HEADER: &str = "Extension";
const SIZE_HEADER: &str = "Size";
const NO_EXTENSION_LABEL: &str = "[no ext]";

/// Row label for an extension key.
pub fn extension_label(ext: &str) -> &str {
    if ext.is_empty() { NO_EXTENSION_LABEL } else { ext }
}

impl Reporter {
    /// Render extension totals as a table, largest first, sizes right-aligned.
    pub fn render_summary<W: WriteColor>(
        &self,
        totals: &ExtensionTotals,
        out: &mut W,
    ) -> io::Result<()> {
        let rows: Vec<(&str, u64, String)> = totals
            .sorted()
            .into_iter()
            .map(|(ext, bytes)| (extension_label(ext), bytes, human_readable(bytes)))
            .collect();

        let ext_width = rows
            .iter()
            .map(|(label, _, _)| label.chars().count())
            .chain([EXTENSION_HEADER.len()])
            .max()
            .unwrap_or_default();
        let size_width = rows
            .iter()
            .map(|(_, _, size)| size.chars().count())
            .chain([SIZE_HEADER.len()])
            .max()
            .unwrap_or_default();
        let table_width = ext_width + size_width + 4;

        let mut bold = ColorSpec::new();
        bold.set_bold(true);

        writeln!(out)?;
        out.set_color(&bold)?;
        writeln!(out, "{:^table_width$}", TITLE)?;
        out.reset()?;
        writeln!(out)?;

        out.set_color(&bold)?;
        write!(
            out,
            "  {:<ext_width$}  {:>size_width$}",
            EXTENSION_HEADER, SIZE_HEADER
        )?;
        out.reset()?;
        writeln!(out)?;
        writeln!(out, "{}", "━".repeat(table_width))?;

        let mut ext_color = ColorSpec::new();
        ext_color.set_fg(Some(Color::Cyan));

        for (label, bytes, size) in &rows {
            write!(out, "  ")?;
            out.set_color(&ext_color)?;
            write!(out, "{:<ext_width$}", label)?;
            out.reset()?;
            write!(out, "  ")?;
            out.set_color(&severity_spec(Severity::classify(*bytes)))?;
            write!(out, "{:>size_width$}", size)?;
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }
}
