//! Document reading utilities

use super::InputSource;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A document ready for classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Name used in reports
    pub name: String,
    /// Document text
    pub text: String,
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a whole document from its source
    pub fn read_document(source: &InputSource) -> Result<Document> {
        let text = match source {
            InputSource::File(path) => Self::read_text(path)?,
            InputSource::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read standard input")?;
                buffer
            }
        };

        Ok(Document {
            name: source.display_name(),
            text,
        })
    }
}
