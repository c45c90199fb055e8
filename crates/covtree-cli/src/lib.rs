//! covtree CLI library
//!
//! Command-line interface for building coverage trees from LCOV or JSON
//! input and rendering them as HTML reports or terminal summaries.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod tree;

pub use commands::{
    Cli, ColorArg, Commands, ConvertArgs, InputArgs, InputSource, ReportArgs, SummaryArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use tree::{render_summary, SummaryConfig};
