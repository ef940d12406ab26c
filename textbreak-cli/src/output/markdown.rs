//! Markdown output formatter

use super::{flag_column, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use textbreak_api::{CharAttributes, Segment};

/// Markdown formatter - a numbered list of segments or an attribute table
/// per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
    numbered: usize,
    table_open: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
            numbered: 0,
            table_open: false,
        }
    }
}

/// Keep table cells on one line and literal
fn escape_cell(unit: u16) -> String {
    match char::from_u32(u32::from(unit)) {
        Some(c) if !c.is_control() && !c.is_whitespace() && c != '|' && c != '`' => {
            format!("`{c}`")
        }
        _ => String::new(),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.numbered = 0;
        self.table_open = false;
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        let text = segment.text.trim();
        if text.is_empty() {
            return Ok(());
        }
        self.segment_count += 1;
        self.numbered += 1;
        writeln!(self.writer, "{}. {}", self.numbered, text.replace('\n', " "))?;
        Ok(())
    }

    fn format_attributes(
        &mut self,
        index: usize,
        unit: u16,
        attributes: &CharAttributes,
    ) -> Result<()> {
        if !self.table_open {
            writeln!(self.writer, "| index | unit | char | flags | line break |")?;
            writeln!(self.writer, "|---:|---|---|---|---|")?;
            self.table_open = true;
        }
        self.segment_count += 1;
        writeln!(
            self.writer,
            "| {index} | U+{unit:04X} | {} | `{}` | {} |",
            escape_cell(unit),
            flag_column(attributes),
            attributes.line_break
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total entries: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
