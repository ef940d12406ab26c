//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textbreak_api::{CharAttributes, Segment};

/// JSON formatter - outputs one document object per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Results for one input
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file name, or `<stdin>`
    pub source: String,
    /// Extracted segments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentData>,
    /// Per-unit attributes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeData>,
}

/// One segment
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// The segment text
    pub text: String,
    /// UTF-16 start index
    pub start: usize,
    /// UTF-16 end index (exclusive)
    pub end: usize,
    /// UTF-8 start offset
    pub byte_start: usize,
    /// UTF-8 end offset (exclusive)
    pub byte_end: usize,
}

/// Attributes of one code unit
#[derive(Debug, Serialize, Deserialize)]
pub struct AttributeData {
    /// UTF-16 index
    pub index: usize,
    /// The code unit itself
    pub unit: u16,
    /// Boundary flags
    #[serde(flatten)]
    pub attributes: CharAttributes,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut DocumentData {
        if self.documents.is_empty() {
            self.documents.push(DocumentData {
                source: String::new(),
                segments: Vec::new(),
                attributes: Vec::new(),
            });
        }
        let last = self.documents.len() - 1;
        &mut self.documents[last]
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            segments: Vec::new(),
            attributes: Vec::new(),
        });
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        self.current().segments.push(SegmentData {
            text: segment.text.clone(),
            start: segment.start,
            end: segment.end,
            byte_start: segment.byte_start,
            byte_end: segment.byte_end,
        });
        Ok(())
    }

    fn format_attributes(
        &mut self,
        index: usize,
        unit: u16,
        attributes: &CharAttributes,
    ) -> Result<()> {
        self.current().attributes.push(AttributeData {
            index,
            unit,
            attributes: *attributes,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
