use crate::error::{Result, SmeltError};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes documents as newline-delimited compact JSON
pub struct DocumentWriter<W: Write> {
    writer: W,
    path: PathBuf,
    count: usize,
}

impl<W: Write> DocumentWriter<W> {
    /// `path` labels I/O errors
    pub fn new(writer: W, path: impl AsRef<Path>) -> Self {
        DocumentWriter {
            writer,
            path: path.as_ref().to_path_buf(),
            count: 0,
        }
    }

    /// Write one document as compact JSON (no spaces after `,`/`:`, UTF-8 unescaped).
    pub fn write_document(&mut self, document: &Value) -> Result<()> {
        let json = serde_json::to_string(document)?;
        writeln!(self.writer, "{}", json).map_err(|e| SmeltError::io(&self.path, e))?;
        self.count += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| SmeltError::io(&self.path, e))
    }

    /// Number of documents written so far
    pub fn count(&self) -> usize {
        self.count
    }
}
