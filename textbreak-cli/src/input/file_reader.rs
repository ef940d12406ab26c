//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads analysis input as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        log::debug!("read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Read everything from `reader` as UTF-8 text
    pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input stream")?;
        Ok(content)
    }

    /// Read standard input to the end
    pub fn read_stdin() -> Result<String> {
        Self::read_all(io::stdin().lock())
    }
}
