//! Severity bands and summary rows
//!
//! Each child listed on a directory page is classified by its floored
//! executed percentage:
//!
//! ```text
//!   0 ........ 34 | 35 ........ 69 | 70 ........ 100
//!   Lo scarlet_red| Med butter      | Hi chameleon
//! ```

use crate::tree::{CoverageStats, NodeRef};
use serde::{Deserialize, Serialize};

/// Floored percentages below this are `Lo`
pub const LOW_UPPER_BOUND: u32 = 35;

/// Floored percentages at or above this are `Hi`
pub const HIGH_LOWER_BOUND: u32 = 70;

/// Coverage severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Classify a floored percentage
    #[must_use]
    pub const fn classify(floor_percent: u32) -> Self {
        if floor_percent < LOW_UPPER_BOUND {
            Self::Low
        } else if floor_percent < HIGH_LOWER_BOUND {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Classify an unrounded percentage
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self::classify(floor_percent(percent))
    }

    /// Short label shown in the bar legend
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Lo",
            Self::Medium => "Med",
            Self::High => "Hi",
        }
    }

    /// Color token used as CSS class
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "scarlet_red",
            Self::Medium => "butter",
            Self::High => "chameleon",
        }
    }
}

/// Floor of a percentage, clamped to 0..=100
#[must_use]
pub fn floor_percent(percent: f64) -> u32 {
    percent.floor().clamp(0.0, 100.0) as u32
}

/// One line of a directory page's summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Relative hyperlink to the child's page
    pub link: String,
    pub severity: Severity,
    /// Bar fill, `floor(percent)`
    pub executed_width: u32,
    /// Unrounded percentage
    pub executed_percent: f64,
    /// Bar remainder, `100 - floor(percent)`
    pub not_executed_width: u32,
    pub executable_lines: usize,
    pub executed_lines: usize,
}

impl SummaryRow {
    /// Build a row from raw statistics
    #[must_use]
    pub fn new(link: String, executable_lines: usize, executed_lines: usize, percent: f64) -> Self {
        let executed_width = floor_percent(percent);
        Self {
            link,
            severity: Severity::classify(executed_width),
            executed_width,
            executed_percent: percent,
            not_executed_width: 100 - executed_width,
            executable_lines,
            executed_lines,
        }
    }

    /// Build the row describing `node` on its parent's page
    #[must_use]
    pub fn for_node(node: &NodeRef<'_>) -> Self {
        Self::new(
            node.link(false),
            node.num_executable_lines(),
            node.num_executed_lines(),
            node.executed_percent(),
        )
    }

    /// Percentage with two decimals, as displayed
    #[must_use]
    pub fn display_percent(&self) -> String {
        format!("{:.2}", self.executed_percent)
    }
}
