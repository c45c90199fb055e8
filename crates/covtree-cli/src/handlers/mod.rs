//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helper functions
//! - Tests

pub mod convert;
pub mod report;
pub mod summary;

pub use convert::execute_convert;
pub use report::{execute_report, resolve_report_config};
pub use summary::execute_summary;

use crate::commands::{InputArgs, InputSource};
use crate::error::CliResult;
use covtree::CoverageTree;
use tracing::debug;

/// Load the coverage tree named by the input flags
pub fn load_tree(input: &InputArgs) -> CliResult<CoverageTree> {
    let tree = match input.source()? {
        InputSource::Lcov(path) => {
            debug!(path = %path.display(), "loading lcov tracefile");
            covtree::load_lcov(path)?
        }
        InputSource::Json(path) => {
            debug!(path = %path.display(), "loading json coverage");
            covtree::load_json(path)?
        }
    };
    Ok(tree)
}
