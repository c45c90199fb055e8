//! Summary command handler

use super::load_tree;
use crate::commands::SummaryArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::tree::{render_summary, SummaryConfig};

/// Execute the summary command
pub fn execute_summary(config: &CliConfig, args: &SummaryArgs) -> CliResult<()> {
    let tree = load_tree(&args.input)?;
    let summary_config = SummaryConfig::default()
        .with_depth(args.depth)
        .with_colors(config.color.should_color());
    print!("{}", render_summary(&tree, &summary_config));
    Ok(())
}
