//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Pattern that selects standard input
pub const STDIN_PATTERN: &str = "-";

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name used in reports
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Resolve input patterns to sources, sorted and deduplicated.
///
/// `-` selects standard input; every other pattern is a glob.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            sources.push(InputSource::Stdin);
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                sources.push(InputSource::File(path));
            }
        }
    }

    if sources.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    sources.sort();
    sources.dedup();
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_glob_expansion() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "skip.md"] {
            fs::write(dir.path().join(name), "good/JJ").unwrap();
        }
        let pattern = format!("{}/*.txt", dir.path().display());

        let sources = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        assert_eq!(
            sources,
            vec![
                InputSource::File(dir.path().join("a.txt")),
                InputSource::File(dir.path().join("b.txt")),
            ]
        );
    }

    #[test]
    fn test_stdin_pattern() {
        let sources = resolve_patterns(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
        assert_eq!(sources[0].display_name(), "<stdin>");
    }

    #[test]
    fn test_no_match() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.tagged", dir.path().display());
        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
