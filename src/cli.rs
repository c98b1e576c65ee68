use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ParityOverrides, ReviewOverrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "port-progress")]
#[command(about = "Port progress tracker - review markers and test-suite parity", long_about = None)]
pub struct Args {
    /// YAML config file with `review` and `parity` sections
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List source files and whether they carry the review marker
    Review(ReviewArgs),

    /// Compare the original test suite against the ported one
    Parity(ParityArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReviewArgs {
    /// Directory to scan
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Extension of the files to check
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Leading text that marks a file as reviewed
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// File name to skip. Can be specified multiple times.
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ParityArgs {
    /// Test suite of the original runtime
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Test suite of the ported runtime
    #[arg(long, value_name = "FILE")]
    pub target: Option<PathBuf>,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }
}

impl ReviewArgs {
    pub fn overrides(&self) -> ReviewOverrides {
        ReviewOverrides {
            root: self.root.clone(),
            extension: self.extension.clone(),
            marker: self.marker.clone(),
            excluded_files: self.exclude.clone(),
        }
    }
}

impl ParityArgs {
    pub fn overrides(&self) -> ParityOverrides {
        ParityOverrides {
            source_suite: self.source.clone(),
            target_suite: self.target.clone(),
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
