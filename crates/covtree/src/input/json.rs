//! JSON line-coverage input
//!
//! ```json
//! { "files": { "/work/src/a.php": { "1": -2, "2": 1, "3": -1 } } }
//! ```
//!
//! Status codes follow [`LineStatus`](crate::LineStatus).

use super::SourceCoverage;
use crate::result::CovResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct JsonCoverage {
    files: BTreeMap<String, BTreeMap<i64, i64>>,
}

/// Parse JSON coverage; files come back sorted by path
pub fn parse_json(content: &str) -> CovResult<Vec<SourceCoverage>> {
    let parsed: JsonCoverage = serde_json::from_str(content)?;
    Ok(parsed
        .files
        .into_iter()
        .map(|(path, lines)| SourceCoverage::new(PathBuf::from(path), lines))
        .collect())
}

/// Serialize coverage to the JSON input format
pub fn to_json(files: &[SourceCoverage]) -> CovResult<String> {
    let doc = JsonCoverage {
        files: files
            .iter()
            .map(|f| (f.path.to_string_lossy().into_owned(), f.lines.clone()))
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
