//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use lexsent_api::Preset;
use lexsent_engine::WeightRegistry;
use std::io::{self, Write};

pub mod classify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score documents against a sentiment lexicon
    Classify(classify::ClassifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List classifier presets
    Presets,

    /// List positional weight functions
    Weights,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                subcommand.write_to(&mut out)?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Write the listing
    pub fn write_to(self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Presets => {
                for preset in Preset::ALL {
                    let config = preset.config();
                    let pos: String = lexsent_api::PosCategory::DISPATCH_ORDER
                        .into_iter()
                        .filter(|&category| config.pos.is_enabled(category))
                        .map(|category| category.code())
                        .collect();
                    writeln!(
                        out,
                        "{:<14} pos={:<4} mode={:<5} weight={}",
                        preset.name(),
                        pos,
                        config.scan_mode.as_str(),
                        config.weight.name()
                    )?;
                }
            }
            ListCommands::Weights => {
                for name in WeightRegistry::new().names() {
                    writeln!(out, "{name}")?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "text      one tab-separated line per document")?;
                writeln!(out, "json      JSON array of results")?;
                writeln!(out, "markdown  table of results")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(subcommand: ListCommands) -> String {
        let mut buffer = Vec::new();
        subcommand.write_to(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_list_presets() {
        let output = listing(ListCommands::Presets);
        assert_eq!(output.lines().count(), Preset::ALL.len());
        assert!(output.contains("av-once"));
        assert!(output.contains("a-cosine-all   pos=a    mode=all   weight=cosine"));
    }

    #[test]
    fn test_list_weights() {
        let output = listing(ListCommands::Weights);
        assert_eq!(output, "cosine\nidentity\nlinear\nnoop\n");
    }

    #[test]
    fn test_list_formats() {
        let output = listing(ListCommands::Formats);
        for format in ["text", "json", "markdown"] {
            assert!(output.contains(format));
        }
    }
}
