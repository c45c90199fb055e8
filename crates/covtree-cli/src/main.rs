//! covtree CLI: hierarchical HTML line-coverage reports
//!
//! ## Usage
//!
//! ```bash
//! covtree report --lcov lcov.info -o target/coverage   # HTML report
//! covtree summary --json coverage.json --depth 2       # Terminal tree
//! covtree convert --lcov lcov.info -o coverage.json    # LCOV to JSON
//! ```

use clap::Parser;
use covtree_cli::{
    handlers::{execute_convert, execute_report, execute_summary},
    logging::init_tracing,
    Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    let use_colors = config.color.should_color();
    console::set_colors_enabled(use_colors);
    init_tracing(config.verbosity, use_colors);

    match cli.command {
        Commands::Report(args) => execute_report(&config, &args).map(|_| ()),
        Commands::Summary(args) => execute_summary(&config, &args),
        Commands::Convert(args) => execute_convert(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
