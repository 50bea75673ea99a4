//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexsent_api::ResultData;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs all documents as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<DocumentReport>,
}

/// One array entry
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    /// Document source
    pub source: String,
    /// Classification result
    #[serde(flatten)]
    pub result: ResultData,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, result: &ResultData) -> Result<()> {
        self.reports.push(DocumentReport {
            source: source.to_string(),
            result: result.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
