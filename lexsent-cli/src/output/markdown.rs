//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexsent_api::ResultData;
use std::io::Write;

/// Markdown formatter - outputs documents as rows of a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    totals: (f64, f64),
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            totals: (0.0, 0.0),
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, result: &ResultData) -> Result<()> {
        if self.document_count == 0 {
            writeln!(self.writer, "| Document | Positive | Negative | Found | Negated |")?;
            writeln!(self.writer, "|---|---:|---:|---:|---:|")?;
        }
        self.document_count += 1;
        self.totals.0 += result.positive;
        self.totals.1 += result.negative;
        writeln!(
            self.writer,
            "| {} | {:.4} | {:.4} | {} | {} |",
            source.replace('|', "\\|"),
            result.positive,
            result.negative,
            result.tokens_found,
            result.tokens_negated
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total documents: {} (positive {:.4}, negative {:.4})*",
            self.document_count, self.totals.0, self.totals.1
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
