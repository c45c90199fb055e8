//! covtree: hierarchical line-coverage reports
//!
//! Builds a tree mirroring a source tree's directories and files, aggregates
//! executable/executed line counts up the tree, and renders one HTML page per
//! node with threshold-colored coverage bars for each directory's children.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  LCOV / JSON  →  SourceCoverage  →  CoverageTree  →  Report     │
//! │                                        ↓               ↓        │
//! │                              memoized aggregates   Severity     │
//! │                                                    Lo/Med/Hi    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use covtree::{CoverageTree, Report, ReportConfig};
//! use std::collections::BTreeMap;
//!
//! # fn main() -> covtree::CovResult<()> {
//! let mut tree = CoverageTree::new("project");
//! let src = tree.add_directory(tree.root(), "src")?;
//! let lines: BTreeMap<i64, i64> = [(1, -2), (2, 1), (3, -1)].into_iter().collect();
//! tree.add_file(src, "a.php", &lines)?;
//!
//! let summary = Report::new(ReportConfig::new().with_target("target/coverage")).generate(&tree)?;
//! println!("{} pages, {:.2}% covered", summary.pages, summary.executed_percent);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod input;
pub mod report;
mod result;
mod text;
pub mod tree;

pub use input::{build_tree, load_json, load_lcov, SourceCoverage};
pub use report::{
    PageRenderer, Report, ReportConfig, ReportSummary, Severity, SummaryRow, Template,
    HIGH_LOWER_BOUND, LOW_UPPER_BOUND,
};
pub use result::{CovError, CovResult};
pub use text::{escape_html, safe_filename};
pub use tree::{
    CoverageStats, CoverageTree, DirId, DirectoryNode, FileId, FileNode, LineCoverage,
    LineStatus, NodeId, NodeRef,
};
