//! Classify command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Args, ValueEnum};
use lexsent_api::{DocSentiScore, Options, PosCategory, Preset, ScanMode};
use lexsent_engine::{
    ClassifierConfig, DocumentClassifier, LengthNormalized, MemoryLexicon, StopwordList,
    UnigramTagger,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Sentiment lexicon (tab-separated: word, pos, positive, negative[, frequency])
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: PathBuf,

    /// Start from a named preset
    #[arg(short, long, value_parser = PossibleValuesParser::new(Preset::ALL.map(|p| p.name())))]
    pub preset: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input is raw text; tag it with the lexicon-derived tagger
    #[arg(long)]
    pub untagged: bool,

    /// Stopword list, one word per line (default: built-in English list)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Part-of-speech categories to score, as letters (a, v, r, n)
    #[arg(long, value_name = "LETTERS")]
    pub pos: Option<String>,

    /// Duplicate-occurrence policy
    #[arg(long, value_parser = PossibleValuesParser::new(["all", "once"]))]
    pub score_mode: Option<String>,

    /// Positional weight function
    #[arg(short, long, value_name = "NAME")]
    pub weight: Option<String>,

    /// Disable negation handling
    #[arg(long, conflicts_with = "negation_window")]
    pub no_negation: bool,

    /// Negation window, in tokens
    #[arg(long, value_name = "N")]
    pub negation_window: Option<usize>,

    /// Discount frequent words
    #[arg(long, conflicts_with = "no_score_freq")]
    pub score_freq: bool,

    /// Do not discount frequent words, even when the preset does
    #[arg(long)]
    pub no_score_freq: bool,

    /// Discard stopwords
    #[arg(long, conflicts_with = "no_score_stop")]
    pub score_stop: bool,

    /// Keep stopwords, even when the preset discards them
    #[arg(long)]
    pub no_score_stop: bool,

    /// Divide totals by the number of matched tokens
    #[arg(long)]
    pub normalize: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include annotated tokens in text output
    #[arg(long)]
    pub annotate: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per document
    Text,
    /// JSON array of results
    Json,
    /// Markdown table
    Markdown,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting classification");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_path(path)?,
            None => CliConfig::default(),
        };

        let mut scorer = DocSentiScore::with_classifier(self.build_classifier(&config)?);
        let options = config.classifier.clone().merged(&self.options()?);
        scorer
            .set_parameters(&options)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        log::debug!("Classifier configuration: {:?}", scorer.classifier().config());

        let sources = resolve_patterns(&self.input)?;
        log::info!("Classifying {} document(s)", sources.len());

        let mut formatter = self.formatter(&config)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(sources.len() as u64);

        let tagged = !self.untagged;
        let verbose = self.verbose >= 2;
        for source in &sources {
            let document = FileReader::read_document(source)?;
            let scores = scorer
                .classify_document(&document.text, tagged, verbose, &Options::default())
                .map_err(|e| CliError::ClassificationError {
                    source: document.name.clone(),
                    message: e.to_string(),
                })?;
            log::info!("{}: pos={:.4} neg={:.4}", document.name, scores.0, scores.1);

            if let Some(result) = scorer.result_data() {
                formatter.format_result(&document.name, &result)?;
            }
            progress.document_completed(&document.name);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }

    fn build_classifier(&self, config: &CliConfig) -> Result<DocumentClassifier> {
        let lexicon = load_lexicon(&self.lexicon)?;

        let preset = self.preset.as_deref().or(config.preset.as_deref());
        let base = match preset {
            Some(name) => Preset::from_name(name)
                .map(|preset| preset.config())
                .ok_or_else(|| CliError::ConfigError(format!("unknown preset '{name}'")))?,
            None => ClassifierConfig::default(),
        };

        let mut builder = DocumentClassifier::builder()
            .config(base)
            .tagger(UnigramTagger::from_lexicon(&lexicon));
        if let Some(path) = &self.stopwords {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read stopword list: {}", path.display()))?;
            builder = builder.stopwords(StopwordList::parse(&source));
        }
        if self.normalize {
            builder = builder.adjuster(LengthNormalized);
        }

        Ok(builder.lexicon(lexicon).build()?)
    }

    /// Overrides given on the command line
    fn options(&self) -> Result<Options> {
        let mut options = Options::new();

        if let Some(letters) = &self.pos {
            let enabled = parse_pos_letters(letters)?;
            for category in PosCategory::DISPATCH_ORDER {
                options = options.pos(category, enabled.contains(&category));
            }
        }
        if let Some(mode) = self.score_mode.as_deref().and_then(ScanMode::from_name) {
            options = options.score_mode(mode);
        }
        if let Some(name) = &self.weight {
            options = options.score_function(name.clone());
        }
        if self.no_negation {
            options = options.negation(false, 0, 0.0);
        } else if let Some(window) = self.negation_window {
            options = options.negation(true, window, 0.0);
        }
        if self.score_freq || self.no_score_freq {
            options = options.score_freq(self.score_freq);
        }
        if self.score_stop || self.no_score_stop {
            options = options.score_stop(self.score_stop);
        }

        Ok(options)
    }

    fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(
                TextFormatter::new(writer).with_annotations(self.annotate || config.output.annotate),
            ),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

fn load_lexicon(path: &Path) -> Result<MemoryLexicon> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lexicon".to_string());
    let mut lexicon = MemoryLexicon::new(name);
    let count = lexicon
        .load_path(path)
        .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
    log::info!("Loaded {count} lexicon entries from {}", path.display());
    Ok(lexicon)
}

fn parse_pos_letters(letters: &str) -> Result<Vec<PosCategory>> {
    letters
        .chars()
        .map(|code| {
            PosCategory::from_code(code.to_ascii_lowercase()).ok_or_else(|| {
                anyhow::Error::from(CliError::ConfigError(format!(
                    "unknown part of speech '{code}' in --pos"
                )))
            })
        })
        .collect()
}
