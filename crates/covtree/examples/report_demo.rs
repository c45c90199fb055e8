//! Report Demo - building a coverage tree by hand
//!
//! Attaches a few directories and files, prints the rows of the root page
//! with their severity, then writes the HTML report.
//!
//! # Running
//!
//! ```bash
//! cargo run --example report_demo -p covtree
//! ```

use covtree::report::summary_rows;
use covtree::{CovResult, CoverageStats, CoverageTree, Report, ReportConfig};
use std::collections::BTreeMap;

fn lines(codes: &[i64]) -> BTreeMap<i64, i64> {
    codes
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as i64 + 1, c))
        .collect()
}

fn main() -> CovResult<()> {
    let mut tree = CoverageTree::new("demo");
    let root = tree.root();

    let src = tree.add_directory(root, "src")?;
    tree.add_file(src, "parser.php", &lines(&[-2, 1, 1, 1, -1, 1, -2]))?;
    tree.add_file(src, "lexer.php", &lines(&[1, -1, -1, -1, -2]))?;

    let util = tree.add_directory(src, "util")?;
    tree.add_file(util, "strings.php", &lines(&[-1, -1, -1, 1]))?;

    tree.add_file(root, "bootstrap.php", &lines(&[1, 1, -2]))?;

    let top = tree.node(root);
    println!(
        "{}: {} of {} lines executed ({:.2}%)\n",
        top.name(),
        top.num_executed_lines(),
        top.num_executable_lines(),
        top.executed_percent()
    );

    for row in summary_rows(&tree, root) {
        println!(
            "  [{:>3}] {:>6}%  {}",
            row.severity.label(),
            row.display_percent(),
            row.link
        );
    }

    let target = std::env::temp_dir().join("covtree-demo");
    let summary = Report::new(ReportConfig::new().with_target(&target)).generate(&tree)?;
    println!("\n{} pages written, open {}", summary.pages, summary.index.display());
    Ok(())
}
