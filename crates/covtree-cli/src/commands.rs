//! CLI command definitions using clap

use crate::error::{CliError, CliResult};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// covtree: hierarchical HTML line-coverage reports
#[derive(Parser, Debug)]
#[command(name = "covtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the HTML coverage report
    Report(ReportArgs),

    /// Print the coverage tree to the terminal
    Summary(SummaryArgs),

    /// Convert an LCOV tracefile to JSON line coverage
    Convert(ConvertArgs),
}

/// Coverage input, exactly one of LCOV or JSON
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// LCOV tracefile
    #[arg(long, value_name = "FILE")]
    pub lcov: Option<PathBuf>,

    /// JSON line-coverage file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// Which loader an input uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    Lcov(&'a Path),
    Json(&'a Path),
}

impl InputArgs {
    /// Resolve the single input source
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] unless exactly one input is given.
    pub fn source(&self) -> CliResult<InputSource<'_>> {
        match (&self.lcov, &self.json) {
            (Some(path), None) => Ok(InputSource::Lcov(path)),
            (None, Some(path)) => Ok(InputSource::Json(path)),
            (Some(_), Some(_)) => Err(CliError::invalid_argument(
                "give either --lcov or --json, not both",
            )),
            (None, None) => Err(CliError::invalid_argument(
                "no coverage input, use --lcov FILE or --json FILE",
            )),
        }
    }
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Character set declared by every page
    #[arg(long)]
    pub charset: Option<String>,

    /// Directory with template overrides
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// YAML report configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the summary command
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum depth to print (unlimited when omitted)
    #[arg(short, long)]
    pub depth: Option<usize>,
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// LCOV tracefile to read
    #[arg(long, value_name = "FILE")]
    pub lcov: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
