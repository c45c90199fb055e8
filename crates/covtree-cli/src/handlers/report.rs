//! Report command handler

use super::load_tree;
use crate::commands::ReportArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use covtree::{Report, ReportConfig, ReportSummary};

/// Build the report configuration: config file first, then flags on top
pub fn resolve_report_config(args: &ReportArgs) -> CliResult<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_yaml_file(path).map_err(|e| {
            CliError::config(format!("cannot load {}: {e}", path.display()))
        })?,
        None => ReportConfig::new(),
    };

    if let Some(output) = &args.output {
        config = config.with_target(output);
    }
    if let Some(title) = &args.title {
        config = config.with_title(title);
    }
    if let Some(charset) = &args.charset {
        config = config.with_charset(charset);
    }
    if let Some(templates) = &args.templates {
        config = config.with_template_dir(templates);
    }
    Ok(config)
}

/// Execute the report command
pub fn execute_report(config: &CliConfig, args: &ReportArgs) -> CliResult<ReportSummary> {
    let report_config = resolve_report_config(args)?;
    let tree = load_tree(&args.input)?;
    let summary = Report::new(report_config).generate(&tree)?;

    if !config.verbosity.is_quiet() {
        println!(
            "Report written to {} ({} pages, {} of {} lines executed, {:.2}%)",
            summary.index.display(),
            summary.pages,
            summary.executed_lines,
            summary.executable_lines,
            summary.executed_percent
        );
    }
    Ok(summary)
}
