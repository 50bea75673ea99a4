//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexsent_api::ResultData;
use std::io::{self, Write};

/// Plain text formatter - one tab-separated line per document
pub struct TextFormatter<W: Write> {
    writer: W,
    annotate: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            annotate: false,
        }
    }

    /// Follow each document line with its annotated tokens
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, result: &ResultData) -> Result<()> {
        writeln!(
            self.writer,
            "{source}\tpos={:.4}\tneg={:.4}\tfound={}\tnegated={}",
            result.positive, result.negative, result.tokens_found, result.tokens_negated
        )?;
        if self.annotate {
            writeln!(self.writer, "  {}", result.annotated)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
