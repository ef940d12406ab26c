//! Plain text output formatter

use super::{flag_column, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};
use textbreak_api::{CharAttributes, Segment};

/// Plain text formatter - one segment per line, blank segments skipped
pub struct TextFormatter<W: Write> {
    writer: W,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, sources: 0 }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        if self.sources > 0 {
            writeln!(self.writer)?;
        }
        self.sources += 1;
        writeln!(self.writer, "==> {source} <==")?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        let text = segment.text.trim();
        if !text.is_empty() {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn format_attributes(
        &mut self,
        index: usize,
        unit: u16,
        attributes: &CharAttributes,
    ) -> Result<()> {
        writeln!(
            self.writer,
            "{index:>8}  U+{unit:04X}  {}  {}",
            flag_column(attributes),
            attributes.line_break
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
