//! Coverage tree visualization
//!
//! ## Example Output
//!
//! ```text
//! /work/src/ 2/4 (50.00%) Med
//! ├── util/ 0/1 (0.00%) Lo
//! │   └── s.php 0/1 (0.00%) Lo
//! ├── a.php 1/2 (50.00%) Med
//! └── b.php 1/1 (100.00%) Hi
//!
//! Total: 3 files, 2 of 4 lines executed (50.00%)
//! ```

use covtree::{CoverageStats, CoverageTree, DirId, NodeId, NodeRef, Severity};

/// Configuration for tree display
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryConfig {
    /// Maximum depth to display (None = unlimited)
    pub max_depth: Option<usize>,
    /// Color the severity labels
    pub use_colors: bool,
}

impl SummaryConfig {
    #[must_use]
    pub const fn with_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

fn severity_label(severity: Severity, use_colors: bool) -> String {
    let styled = console::style(severity.label()).force_styling(use_colors);
    let styled = match severity {
        Severity::Low => styled.red(),
        Severity::Medium => styled.yellow(),
        Severity::High => styled.green(),
    };
    styled.to_string()
}

fn node_line(node: &NodeRef<'_>, config: &SummaryConfig) -> String {
    let name = node.name();
    let suffix = if node.is_directory() && !name.ends_with('/') {
        "/"
    } else {
        ""
    };
    let percent = node.executed_percent();
    format!(
        "{name}{suffix} {}/{} ({percent:.2}%) {}",
        node.num_executed_lines(),
        node.num_executable_lines(),
        severity_label(Severity::from_percent(percent), config.use_colors)
    )
}

/// Render the tree to a string
#[must_use]
pub fn render_summary(tree: &CoverageTree, config: &SummaryConfig) -> String {
    let root = tree.node(tree.root());
    let mut output = node_line(&root, config);
    output.push('\n');

    render_children(tree, tree.root(), config, "", 1, &mut output);

    output.push('\n');
    output.push_str(&format!(
        "Total: {} files, {} of {} lines executed ({:.2}%)\n",
        tree.file_count(),
        root.num_executed_lines(),
        root.num_executable_lines(),
        root.executed_percent()
    ));
    output
}

fn render_children(
    tree: &CoverageTree,
    dir: DirId,
    config: &SummaryConfig,
    prefix: &str,
    depth: usize,
    output: &mut String,
) {
    if config.max_depth.is_some_and(|max| depth > max) {
        return;
    }

    let children = tree.directory(dir).children();
    for (i, &child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let connector = if is_last { "└── " } else { "├── " };
        let child_prefix = if is_last { "    " } else { "│   " };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(&node_line(&tree.node(child), config));
        output.push('\n');

        if let NodeId::Directory(sub) = child {
            let new_prefix = format!("{prefix}{child_prefix}");
            render_children(tree, sub, config, &new_prefix, depth + 1, output);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lines(codes: &[i64]) -> BTreeMap<i64, i64> {
        codes
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as i64 + 1, c))
            .collect()
    }

    fn sample() -> CoverageTree {
        let mut tree = CoverageTree::new("/work/src");
        let util = tree.add_directory(tree.root(), "util").unwrap();
        let _ = tree.add_file(util, "s.php", &lines(&[-1])).unwrap();
        let _ = tree.add_file(tree.root(), "a.php", &lines(&[1, -1])).unwrap();
        let _ = tree.add_file(tree.root(), "b.php", &lines(&[-2, 1])).unwrap();
        tree
    }

    #[test]
    fn test_render_full_tree() {
        let output = render_summary(&sample(), &SummaryConfig::default());
        let expected = "\
/work/src/ 2/4 (50.00%) Med
├── util/ 0/1 (0.00%) Lo
│   └── s.php 0/1 (0.00%) Lo
├── a.php 1/2 (50.00%) Med
└── b.php 1/1 (100.00%) Hi

Total: 3 files, 2 of 4 lines executed (50.00%)
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_depth_limit() {
        let output = render_summary(&sample(), &SummaryConfig::default().with_depth(Some(1)));
        assert!(output.contains("util/"));
        assert!(!output.contains("s.php"));
        assert!(output.contains("Total: 3 files"));
    }

    #[test]
    fn test_depth_zero_prints_root_only() {
        let output = render_summary(&sample(), &SummaryConfig::default().with_depth(Some(0)));
        assert!(output.starts_with("/work/src/ 2/4"));
        assert!(!output.contains("├──"));
    }

    #[test]
    fn test_no_escape_codes_without_colors() {
        let output = render_summary(&sample(), &SummaryConfig::default().with_colors(false));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_colors_forced() {
        let output = render_summary(&sample(), &SummaryConfig::default().with_colors(true));
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_empty_tree() {
        let tree = CoverageTree::new(".");
        let output = render_summary(&tree, &SummaryConfig::default());
        assert!(output.starts_with("./ 0/0 (0.00%) Lo"));
        assert!(output.contains("Total: 0 files"));
    }
}
