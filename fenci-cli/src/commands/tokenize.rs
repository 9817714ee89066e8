//! Tokenize command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use fenci_core::{Analyzer, AnalyzerConfig, JiebaSegmenter, Tokenizer};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Segmentation mode: index or search
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable HMM discovery of unknown words
    #[arg(long)]
    pub no_hmm: bool,

    /// Extra jieba dictionary (repeatable)
    #[arg(long, value_name = "FILE")]
    pub user_dict: Vec<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let analyzer = self.build_analyzer(&config)?;
        let format = self.resolve_format(&config)?;

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);
        let mut tokenizer = analyzer.tokenizer();

        if self.input.is_empty() {
            log::info!("Reading from stdin");
            run_pass(&mut tokenizer, io::stdin().lock(), None, formatter.as_mut())?;
        } else {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                let source = path.display().to_string();
                log::info!(
                    "Tokenizing {} ({} bytes)",
                    source,
                    FileReader::file_size(path)?
                );

                let reader = FileReader::open(path)?;
                run_pass(&mut tokenizer, reader, Some(&source), formatter.as_mut())
                    .with_context(|| format!("Failed to tokenize {source}"))?;
                progress.file_completed(&source);
            }

            progress.finish();
        }

        formatter.finish()
    }

    /// Build the analyzer from flags layered over the config file
    pub fn build_analyzer(&self, config: &CliConfig) -> Result<Analyzer> {
        let mode_name = self.mode.as_deref().unwrap_or(&config.analysis.mode);
        let analyzer_config = AnalyzerConfig::builder()
            .mode_name(mode_name)
            .map_err(|e| CliError::ConfigError(e.to_string()))?
            .build();

        let mut builder = JiebaSegmenter::builder().hmm(config.analysis.hmm && !self.no_hmm);
        for dict in config.analysis.user_dict.iter().chain(&self.user_dict) {
            builder = builder.user_dict(dict);
        }
        let engine = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::debug!("Analyzer mode: {}", analyzer_config.mode());
        Ok(Analyzer::with_config(Arc::new(engine), analyzer_config))
    }

    /// Output format from the flag, else from the config file
    pub fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
                .into()
            }),
        }
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
}

/// Run one pass over `reader` and write its tokens
fn run_pass<R: Read>(
    tokenizer: &mut Tokenizer,
    reader: R,
    source: Option<&str>,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    tokenizer
        .reset(reader)
        .map_err(|e| CliError::TokenizeError(e.to_string()))?;
    formatter.begin_document(source)?;

    let mut position = 0usize;
    while let Some(token) = tokenizer.pull()? {
        position += token.position_increment as usize;
        formatter.format_token(&token, position.saturating_sub(1))?;
    }

    let (final_offset, _) = tokenizer.finish()?;
    formatter.end_document(final_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TextFormatter;
    use fenci_core::SegmentationMode;

    fn args() -> TokenizeArgs {
        TokenizeArgs {
            input: Vec::new(),
            output: None,
            format: None,
            mode: None,
            config: None,
            no_hmm: false,
            user_dict: Vec::new(),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_mode_from_config_file() {
        let mut config = CliConfig::default();
        config.analysis.mode = "search".to_string();

        let analyzer = args().build_analyzer(&config).unwrap();
        assert_eq!(analyzer.config().mode(), SegmentationMode::Search);
    }

    #[test]
    fn test_mode_flag_overrides_config() {
        let mut config = CliConfig::default();
        config.analysis.mode = "search".to_string();

        let mut args = args();
        args.mode = Some("index".to_string());
        let analyzer = args.build_analyzer(&config).unwrap();
        assert_eq!(analyzer.config().mode(), SegmentationMode::Index);
    }

    #[test]
    fn test_unknown_mode_fails_at_construction() {
        let mut args = args();
        args.mode = Some("turbo".to_string());

        let err = args.build_analyzer(&CliConfig::default()).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("unknown segmentation mode 'turbo'"));
    }

    #[test]
    fn test_format_resolution() {
        let mut config = CliConfig::default();
        config.output.default_format = "json".to_string();
        assert_eq!(args().resolve_format(&config).unwrap(), OutputFormat::Json);

        let mut flagged = args();
        flagged.format = Some(OutputFormat::Markdown);
        assert_eq!(flagged.resolve_format(&config).unwrap(), OutputFormat::Markdown);

        config.output.default_format = "yaml".to_string();
        assert!(args().resolve_format(&config).is_err());
    }

    #[test]
    fn test_run_pass_positions() {
        let analyzer = Analyzer::jieba(AnalyzerConfig::with_mode(SegmentationMode::Search));
        let mut tokenizer = analyzer.tokenizer();

        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            run_pass(&mut tokenizer, "中华人民共和国".as_bytes(), None, &mut formatter).unwrap();
            formatter.finish().unwrap();
        }

        let out = String::from_utf8(buf).unwrap();
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("中华人民共和国,0,7,0,"));
    }
}
