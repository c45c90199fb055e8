//! Coverage inputs: LCOV tracefiles, JSON line maps, and the tree builder

mod builder;
pub mod json;
pub mod lcov;

pub use builder::build_tree;

use crate::result::CovResult;
use crate::tree::CoverageTree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Raw line coverage of one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCoverage {
    pub path: PathBuf,
    /// 1-based line number to status code
    pub lines: BTreeMap<i64, i64>,
}

impl SourceCoverage {
    #[must_use]
    pub fn new(path: PathBuf, lines: BTreeMap<i64, i64>) -> Self {
        Self { path, lines }
    }
}

/// Read an LCOV tracefile and build its tree
pub fn load_lcov(path: &Path) -> CovResult<CoverageTree> {
    let content = std::fs::read_to_string(path)?;
    build_tree(lcov::parse_lcov(&content)?)
}

/// Read a JSON coverage file and build its tree
pub fn load_json(path: &Path) -> CovResult<CoverageTree> {
    let content = std::fs::read_to_string(path)?;
    build_tree(json::parse_json(&content)?)
}
