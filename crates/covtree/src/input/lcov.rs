//! LCOV tracefile reader
//!
//! Only line records are used:
//!
//! ```text
//! SF:<source file>
//! DA:<line>,<execution count>[,<checksum>]
//! end_of_record
//! ```
//!
//! Everything else (TN, FN, FNDA, BRDA, LF, LH, ...) is skipped. Records for
//! the same source file are merged by summing hits.

use super::SourceCoverage;
use crate::result::{CovError, CovResult};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::debug;

/// Hit counts of one source file
type Hits = BTreeMap<u32, u64>;

/// Parse an LCOV tracefile
///
/// Files appear in the order they are first seen. Lines without a `DA`
/// record become "not executable" so every file's line data is contiguous.
///
/// # Errors
///
/// Returns [`CovError::InvalidInput`] for a malformed `DA` record or a `DA`
/// record outside `SF` .. `end_of_record`.
pub fn parse_lcov(content: &str) -> CovResult<Vec<SourceCoverage>> {
    let mut order: Vec<PathBuf> = Vec::new();
    let mut merged: HashMap<PathBuf, Hits> = HashMap::new();
    let mut current: Option<(PathBuf, Hits)> = None;

    let mut finish = |record: (PathBuf, Hits)| {
        let (path, hits) = record;
        let entry = merged.entry(path.clone()).or_insert_with(|| {
            order.push(path);
            Hits::new()
        });
        for (line, count) in hits {
            *entry.entry(line).or_insert(0) += count;
        }
    };

    for (index, raw) in content.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();

        if let Some(path) = line.strip_prefix("SF:") {
            if let Some(open) = current.take() {
                debug!(line = number, "SF without end_of_record, closing previous record");
                finish(open);
            }
            current = Some((PathBuf::from(path), Hits::new()));
        } else if let Some(data) = line.strip_prefix("DA:") {
            let Some((_, hits)) = current.as_mut() else {
                return Err(CovError::invalid_input(format!(
                    "lcov line {number}: DA record outside of a source file record"
                )));
            };
            let (line_no, count) = parse_da(data).ok_or_else(|| {
                CovError::invalid_input(format!("lcov line {number}: malformed DA record '{line}'"))
            })?;
            if line_no == 0 {
                debug!(line = number, "skipping DA record for line 0");
                continue;
            }
            *hits.entry(line_no).or_insert(0) += count;
        } else if line == "end_of_record" {
            if let Some(open) = current.take() {
                finish(open);
            }
        }
    }

    if let Some(open) = current.take() {
        debug!("tracefile ended inside a record");
        finish(open);
    }

    Ok(order
        .into_iter()
        .map(|path| {
            let hits = merged.remove(&path).unwrap_or_default();
            SourceCoverage::new(path, hits_to_codes(&hits))
        })
        .collect())
}

fn parse_da(data: &str) -> Option<(u32, u64)> {
    let mut parts = data.split(',');
    let line = parts.next()?.trim().parse().ok()?;
    let count = parts.next()?.trim().parse().ok()?;
    Some((line, count))
}

/// Expand sparse hit counts into contiguous status codes
#[must_use]
pub fn hits_to_codes(hits: &BTreeMap<u32, u64>) -> BTreeMap<i64, i64> {
    let last = hits.keys().next_back().copied().unwrap_or(0);
    (1..=last)
        .map(|line| {
            let code = match hits.get(&line) {
                Some(&count) if count > 0 => 1,
                Some(_) => -1,
                None => -2,
            };
            (i64::from(line), code)
        })
        .collect()
}
