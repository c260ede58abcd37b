//! CLI argument definitions for the lab synonym finder.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use labsyn_core::{DEFAULT_MIN_SIMILARITY, DEFAULT_RANGE_TOLERANCE};
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "labsyn",
    version,
    about = "Lab synonym finder - flag lab tests that are likely the same test under another name",
    long_about = "Scan a lab listing CSV for rows whose test names are nearly identical\n\
                  while their reference ranges disagree, and export the listing with\n\
                  possible_synonyms / synonyms columns for curation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration from the global flags.
    ///
    /// `--log-level` beats `-v`/`-q`; `RUST_LOG` is honoured only when
    /// neither is given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let mut config = LogConfig::default()
            .with_level_filter(level_filter)
            .with_format(format)
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a lab listing and export it with synonym columns.
    Scan(ScanArgs),

    /// Scan a lab listing and print it without writing anything.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Output CSV path (default: <INPUT dir>/updated_lab_listing.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Scan and report without writing the export.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Drop a suggested synonym before export, as ID=NAME.
    ///
    /// May be given more than once. ID is the row's `id` column.
    #[arg(long = "remove", value_name = "ID=NAME")]
    pub remove: Vec<SynonymRemoval>,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Print every scanned row as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments shared by every command that scans a listing.
#[derive(Args)]
pub struct ListingArgs {
    /// Lab listing CSV with `labs` and `lab_range` columns.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum name similarity (0..1) for a synonym candidate.
    #[arg(long = "min-similarity", value_name = "SCORE", default_value_t = DEFAULT_MIN_SIMILARITY)]
    pub min_similarity: f64,

    /// Range bounds closer than this are treated as the same range.
    #[arg(long = "range-tolerance", value_name = "UNITS", default_value_t = DEFAULT_RANGE_TOLERANCE)]
    pub range_tolerance: f64,

    /// Which rows to print (default: rows without synonym candidates).
    #[arg(long = "view", value_enum, default_value = "unmapped")]
    pub view: ViewArg,
}

/// Row subsets, matching the "Suggested Synonyms" and "Unmapped" tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Suggested,
    Unmapped,
    All,
    None,
}

/// A `--remove ID=NAME` argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynonymRemoval {
    pub id: usize,
    pub name: String,
}

impl FromStr for SynonymRemoval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, name) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ID=NAME, got '{s}'"))?;
        let id = id
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid row id '{}'", id.trim()))?;
        if name.is_empty() {
            return Err("synonym name must not be empty".to_string());
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_removal() {
        let removal: SynonymRemoval = "3=Hemoglobin A1C".parse().unwrap();
        assert_eq!(
            removal,
            SynonymRemoval {
                id: 3,
                name: "Hemoglobin A1C".to_string()
            }
        );
    }

    #[test]
    fn removal_keeps_equals_in_name() {
        let removal: SynonymRemoval = "0=pH=7".parse().unwrap();
        assert_eq!(removal.name, "pH=7");
    }

    #[test]
    fn rejects_bad_removals() {
        assert!("Hemoglobin".parse::<SynonymRemoval>().is_err());
        assert!("x=Hemoglobin".parse::<SynonymRemoval>().is_err());
        assert!("1=".parse::<SynonymRemoval>().is_err());
    }

    #[test]
    fn scan_defaults() {
        let cli = Cli::try_parse_from(["labsyn", "scan", "labs.csv"]).unwrap();
        let Command::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.listing.input, PathBuf::from("labs.csv"));
        assert_eq!(args.listing.min_similarity, DEFAULT_MIN_SIMILARITY);
        assert_eq!(args.listing.range_tolerance, DEFAULT_RANGE_TOLERANCE);
        assert_eq!(args.listing.view, ViewArg::Unmapped);
        assert!(!args.dry_run);
        assert!(args.remove.is_empty());
    }

    #[test]
    fn explicit_log_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "labsyn",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-file",
            "labsyn.log",
            "--color",
            "never",
            "show",
            "labs.csv",
        ])
        .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("labsyn.log")));
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn verbosity_flags_raise_level() {
        let cli = Cli::try_parse_from(["labsyn", "-vv", "show", "labs.csv"]).unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);

        let quiet = Cli::try_parse_from(["labsyn", "show", "labs.csv"]).unwrap();
        let config = quiet.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
