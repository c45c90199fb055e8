//! Per-line coverage data for a single source file
//!
//! Raw data arrives as a mapping from 1-based line number to an Xdebug-style
//! status code:
//!
//! ```text
//!  1  executed
//! -1  executable, not executed
//! -2  not executable (dead code, declarations, blank lines)
//! ```

use crate::result::{CovError, CovResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coverage status of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    /// Not counted as coverable
    NotExecutable,
    /// Coverable, never ran
    NotExecuted,
    /// Coverable, ran at least once
    Executed,
}

impl LineStatus {
    /// Status code of an executed line
    pub const EXECUTED_CODE: i64 = 1;
    /// Status code of an executable line that did not run
    pub const NOT_EXECUTED_CODE: i64 = -1;
    /// Status code of a line that cannot be executed
    pub const NOT_EXECUTABLE_CODE: i64 = -2;

    /// Decode a raw status code
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            Self::EXECUTED_CODE => Some(Self::Executed),
            Self::NOT_EXECUTED_CODE => Some(Self::NotExecuted),
            Self::NOT_EXECUTABLE_CODE => Some(Self::NotExecutable),
            _ => None,
        }
    }

    /// Encode as a raw status code
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Executed => Self::EXECUTED_CODE,
            Self::NotExecuted => Self::NOT_EXECUTED_CODE,
            Self::NotExecutable => Self::NOT_EXECUTABLE_CODE,
        }
    }

    #[must_use]
    pub const fn is_executable(self) -> bool {
        !matches!(self, Self::NotExecutable)
    }

    #[must_use]
    pub const fn is_executed(self) -> bool {
        matches!(self, Self::Executed)
    }

    /// CSS class used on the file page
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Executed => "lineCov",
            Self::NotExecuted => "lineNoCov",
            Self::NotExecutable => "lineDeadCode",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Executed => "executed",
            Self::NotExecuted => "not executed",
            Self::NotExecutable => "not executable",
        }
    }
}

/// Validated line coverage of one file
///
/// Line numbers are contiguous from 1 to `len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCoverage {
    lines: BTreeMap<u32, LineStatus>,
}

impl LineCoverage {
    /// Validate raw `line -> status code` data
    ///
    /// # Errors
    ///
    /// Returns [`CovError::InvalidInput`] when a line number is below 1, the
    /// numbers do not run contiguously from 1, or a status code is unknown.
    pub fn from_codes(raw: &BTreeMap<i64, i64>) -> CovResult<Self> {
        let mut lines = BTreeMap::new();
        let mut expected: i64 = 1;

        for (&number, &code) in raw {
            if number < 1 {
                return Err(CovError::invalid_input(format!(
                    "line numbers start at 1, got {number}"
                )));
            }
            if number != expected {
                return Err(CovError::invalid_input(format!(
                    "line data is not contiguous: line {expected} is missing before line {number}"
                )));
            }
            let status = LineStatus::from_code(code).ok_or_else(|| {
                CovError::invalid_input(format!(
                    "unrecognized status code {code} on line {number}"
                ))
            })?;
            let number = u32::try_from(number).map_err(|_| {
                CovError::invalid_input(format!("line number {number} is out of range"))
            })?;

            let _ = lines.insert(number, status);
            expected += 1;
        }

        Ok(Self { lines })
    }

    /// Number of lines described
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Status of a 1-based line
    #[must_use]
    pub fn get(&self, line: u32) -> Option<LineStatus> {
        self.lines.get(&line).copied()
    }

    /// Lines in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u32, LineStatus)> + '_ {
        self.lines.iter().map(|(&n, &s)| (n, s))
    }

    #[must_use]
    pub fn num_executable_lines(&self) -> usize {
        self.lines.values().filter(|s| s.is_executable()).count()
    }

    #[must_use]
    pub fn num_executed_lines(&self) -> usize {
        self.lines.values().filter(|s| s.is_executed()).count()
    }
}
