//! HTML coverage report
//!
//! ```text
//! target/
//! ├── style.css
//! ├── index.html            root directory summary
//! ├── src.html              directory summary
//! └── src_a.php.html        file page
//! ```

mod config;
mod render;
mod severity;
mod template;

pub use config::ReportConfig;
pub use render::{summary_rows, PageRenderer};
pub use severity::{floor_percent, Severity, SummaryRow, HIGH_LOWER_BOUND, LOW_UPPER_BOUND};
pub use template::Template;

use crate::result::CovResult;
use crate::tree::{CoverageStats, CoverageTree};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a report run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Pages written, stylesheet excluded
    pub pages: usize,
    /// Path of the root page
    pub index: PathBuf,
    pub executable_lines: usize,
    pub executed_lines: usize,
    pub executed_percent: f64,
}

/// Renders a whole coverage tree into a target directory
#[derive(Debug, Clone, Default)]
pub struct Report {
    config: ReportConfig,
}

impl Report {
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Create the target directory, write the stylesheet and every page
    ///
    /// # Errors
    ///
    /// Fails on the first template or write error. Pages written before the
    /// failure are left in place.
    pub fn generate(&self, tree: &CoverageTree) -> CovResult<ReportSummary> {
        std::fs::create_dir_all(&self.config.target)?;

        let renderer = PageRenderer::new(&self.config)?;
        renderer.write_stylesheet()?;

        let root = tree.node(tree.root());
        let pages = renderer.render(tree, root.handle())?;

        let summary = ReportSummary {
            pages,
            index: renderer.page_path(&root),
            executable_lines: root.num_executable_lines(),
            executed_lines: root.num_executed_lines(),
            executed_percent: root.executed_percent(),
        };
        info!(
            pages = summary.pages,
            target = %self.config.target.display(),
            percent = summary.executed_percent,
            "coverage report written"
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_generate_end_to_end() {
        let out = TempDir::new().unwrap();
        let target = out.path().join("nested").join("report");

        let mut tree = CoverageTree::new("root");
        let src = tree.add_directory(tree.root(), "src").unwrap();
        let lines: BTreeMap<i64, i64> = [(1, -2), (2, 1), (3, -1)].into_iter().collect();
        let _ = tree.add_file(src, "a.php", &lines).unwrap();

        let report = Report::new(ReportConfig::new().with_target(&target));
        let summary = report.generate(&tree).unwrap();

        assert_eq!(summary.pages, 3);
        assert_eq!(summary.index, target.join("index.html"));
        assert_eq!(summary.executable_lines, 2);
        assert_eq!(summary.executed_lines, 1);
        assert_eq!(summary.executed_percent, 50.0);
        assert!(target.join("style.css").is_file());
        assert!(target.join("src_a.php.html").is_file());

        let index = std::fs::read_to_string(&summary.index).unwrap();
        assert!(index.contains(r#"<a href="src.html">src</a>"#));
        assert!(index.contains(">Med<"));
    }

    #[test]
    fn test_every_page_gets_its_own_file() {
        let out = TempDir::new().unwrap();
        let tree = crate::build_tree(vec![
            crate::SourceCoverage::new("/w/src/index/a.php".into(), [(1, 1)].into()),
            crate::SourceCoverage::new("/w/a.php".into(), [(1, -1)].into()),
            crate::SourceCoverage::new("/w/lib/x.php".into(), [(1, 1)].into()),
        ])
        .unwrap();

        let summary = Report::new(ReportConfig::new().with_target(out.path()))
            .generate(&tree)
            .unwrap();

        let html = std::fs::read_dir(out.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == "html")
            })
            .count();
        assert_eq!(html, summary.pages);

        let index = std::fs::read_to_string(&summary.index).unwrap();
        assert!(index.contains("lib.html"));
        assert!(out.path().join("src_index_a.php.html").is_file());
    }

    #[test]
    fn test_generate_empty_tree() {
        let out = TempDir::new().unwrap();
        let tree = CoverageTree::new("empty");

        let summary = Report::new(ReportConfig::new().with_target(out.path()))
            .generate(&tree)
            .unwrap();

        assert_eq!(summary.pages, 1);
        assert_eq!(summary.executed_percent, 0.0);
    }

    #[test]
    fn test_generate_into_file_fails() {
        let out = TempDir::new().unwrap();
        let blocker = out.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = Report::new(ReportConfig::new().with_target(&blocker))
            .generate(&CoverageTree::new("root"))
            .unwrap_err();
        assert!(matches!(err, crate::CovError::Io(_)));
    }
}
