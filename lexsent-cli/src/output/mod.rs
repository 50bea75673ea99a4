//! Output formatting module

use anyhow::Result;
use lexsent_api::ResultData;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the result for one document
    fn format_result(&mut self, source: &str, result: &ResultData) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn result() -> ResultData {
        ResultData {
            document: "not/RB bad/JJ".to_string(),
            annotated: "not/RB bad/JJ##NEGAT:1##POS:1.0##NEG:0.0".to_string(),
            separator: '/',
            positive: 1.0,
            negative: 0.0,
            tokens_found: 1,
            tokens_negated: 1,
            negation_span: 1,
            found: BTreeMap::from([("bad/JJ".to_string(), 1)]),
            unscored: Vec::new(),
            tokens: Vec::new(),
        }
    }

    #[test]
    fn test_text_formatter() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer).with_annotations(true);
            formatter.format_result("a.txt", &result()).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "a.txt\tpos=1.0000\tneg=0.0000\tfound=1\tnegated=1\n  \
             not/RB bad/JJ##NEGAT:1##POS:1.0##NEG:0.0\n"
        );
    }

    #[test]
    fn test_json_formatter() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_result("a.txt", &result()).unwrap();
            formatter.format_result("b.txt", &result()).unwrap();
            formatter.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["source"], "b.txt");
        assert_eq!(value[0]["positive"], 1.0);
        assert_eq!(value[0]["found"]["bad/JJ"], 1);
    }

    #[test]
    fn test_markdown_formatter() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_result("a.txt", &result()).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("| Document |"));
        assert!(output.contains("| a.txt | 1.0000 | 0.0000 | 1 | 1 |"));
        assert!(output.contains("*Total documents: 1"));
    }
}
