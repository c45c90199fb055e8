//! Page rendering
//!
//! Every directory gets a summary page listing its direct children with a
//! classified coverage bar. Every file gets a page listing its lines. Pages
//! are written depth first: a directory's own page, then each child in
//! attachment order.

use super::config::ReportConfig;
use super::severity::{SummaryRow, HIGH_LOWER_BOUND, LOW_UPPER_BOUND};
use super::template::Template;
use crate::result::{CovError, CovResult};
use crate::text::escape_html;
use crate::tree::{CoverageStats, CoverageTree, DirId, FileId, NodeId, NodeRef};
use std::path::{Path, PathBuf};
use tracing::debug;

pub(crate) const DIRECTORY_TEMPLATE: &str = "coverage_directory.html";
pub(crate) const ITEM_TEMPLATE: &str = "coverage_item.html";
pub(crate) const FILE_TEMPLATE: &str = "coverage_file.html";
pub(crate) const LINE_TEMPLATE: &str = "coverage_line.html";
pub(crate) const STYLESHEET: &str = "style.css";

fn builtin(name: &str) -> &'static str {
    match name {
        DIRECTORY_TEMPLATE => include_str!("../../templates/coverage_directory.html"),
        ITEM_TEMPLATE => include_str!("../../templates/coverage_item.html"),
        FILE_TEMPLATE => include_str!("../../templates/coverage_file.html"),
        LINE_TEMPLATE => include_str!("../../templates/coverage_line.html"),
        _ => include_str!("../../templates/style.css"),
    }
}

/// Read an override from `dir` if present, else the built-in text
fn template_source(dir: Option<&Path>, name: &str) -> CovResult<String> {
    if let Some(path) = dir.map(|d| d.join(name)).filter(|p| p.is_file()) {
        debug!(template = %path.display(), "using template override");
        return std::fs::read_to_string(&path).map_err(|e| {
            CovError::template(format!("cannot read {}: {e}", path.display()))
        });
    }
    Ok(builtin(name).to_string())
}

/// Summary rows of a directory: sub-directories first, then files
#[must_use]
pub fn summary_rows(tree: &CoverageTree, dir: DirId) -> Vec<SummaryRow> {
    let node = tree.directory(dir);
    node.directories()
        .iter()
        .map(|&d| NodeId::from(d))
        .chain(node.files().iter().map(|&f| NodeId::from(f)))
        .map(|id| SummaryRow::for_node(&tree.node(id)))
        .collect()
}

/// Writes report pages for a tree
#[derive(Debug)]
pub struct PageRenderer {
    target: PathBuf,
    title: String,
    charset: String,
    date: String,
    directory: Template,
    item: Template,
    file: Template,
    line: Template,
    stylesheet: String,
}

impl PageRenderer {
    /// Prepare templates for `config`
    pub fn new(config: &ReportConfig) -> CovResult<Self> {
        let dir = config.template_dir.as_deref();
        Ok(Self {
            target: config.target.clone(),
            title: config.title.clone(),
            charset: config.charset.clone(),
            date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            directory: Template::new(template_source(dir, DIRECTORY_TEMPLATE)?)?,
            item: Template::new(template_source(dir, ITEM_TEMPLATE)?)?,
            file: Template::new(template_source(dir, FILE_TEMPLATE)?)?,
            line: Template::new(template_source(dir, LINE_TEMPLATE)?)?,
            stylesheet: template_source(dir, STYLESHEET)?,
        })
    }

    /// Fix the date printed on pages
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Path of the page `node` renders to
    #[must_use]
    pub fn page_path(&self, node: &NodeRef<'_>) -> PathBuf {
        self.target.join(node.file_name())
    }

    /// Copy the stylesheet into the target directory
    pub fn write_stylesheet(&self) -> CovResult<()> {
        std::fs::write(self.target.join(STYLESHEET), &self.stylesheet)?;
        Ok(())
    }

    /// Render `id` and everything below it, returning the number of pages
    ///
    /// The first failed write aborts the walk; pages already written stay.
    pub fn render(&self, tree: &CoverageTree, id: NodeId) -> CovResult<usize> {
        match id {
            NodeId::File(file) => {
                self.render_file(tree, file)?;
                Ok(1)
            }
            NodeId::Directory(dir) => {
                self.render_directory(tree, dir)?;
                let mut pages = 1;
                for &child in tree.directory(dir).children() {
                    pages += self.render(tree, child)?;
                }
                Ok(pages)
            }
        }
    }

    fn render_directory(&self, tree: &CoverageTree, dir: DirId) -> CovResult<()> {
        let node = tree.node(dir);
        let mut page = self.directory.clone();
        self.set_page_vars(&mut page, &node);
        page.set_var("items", self.render_items(tree, dir));
        page.set_var("low_upper_bound", LOW_UPPER_BOUND);
        page.set_var("high_lower_bound", HIGH_LOWER_BOUND);

        let path = self.page_path(&node);
        page.render_to(&path)?;
        debug!(page = %path.display(), "directory page written");
        Ok(())
    }

    fn render_items(&self, tree: &CoverageTree, dir: DirId) -> String {
        let mut items = String::new();
        for row in summary_rows(tree, dir) {
            let mut item = self.item.clone();
            item.set_var("link", &row.link);
            item.set_var("color", row.severity.color());
            item.set_var("level", row.severity.label());
            item.set_var("executed_width", row.executed_width);
            item.set_var("executed_percent", row.display_percent());
            item.set_var("not_executed_width", row.not_executed_width);
            item.set_var("executable_lines", row.executable_lines);
            item.set_var("executed_lines", row.executed_lines);
            items.push_str(&item.render());
        }
        items
    }

    fn render_file(&self, tree: &CoverageTree, file: FileId) -> CovResult<()> {
        let node = tree.node(file);
        let mut page = self.file.clone();
        self.set_page_vars(&mut page, &node);

        let mut items = String::new();
        for (number, status) in tree.file(file).lines().iter() {
            let mut line = self.line.clone();
            line.set_var("number", number);
            line.set_var("class", status.css_class());
            line.set_var("status", status.label());
            items.push_str(&line.render());
        }
        page.set_var("items", items);

        let path = self.page_path(&node);
        page.render_to(&path)?;
        debug!(page = %path.display(), "file page written");
        Ok(())
    }

    fn set_page_vars(&self, page: &mut Template, node: &NodeRef<'_>) {
        page.set_var("title", escape_html(&self.title));
        page.set_var("charset", escape_html(&self.charset));
        page.set_var("link", node.link(true));
        page.set_var("num_executable_lines", node.num_executable_lines());
        page.set_var("num_executed_lines", node.num_executed_lines());
        page.set_var("executed_percent", format!("{:.2}", node.executed_percent()));
        page.set_var("date", &self.date);
        page.set_var("version", env!("CARGO_PKG_VERSION"));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn lines(codes: &[i64]) -> BTreeMap<i64, i64> {
        codes
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as i64 + 1, c))
            .collect()
    }

    fn sample_tree() -> CoverageTree {
        let mut tree = CoverageTree::new("project");
        let src = tree.add_directory(tree.root(), "src").unwrap();
        let _ = tree.add_file(src, "a.php", &lines(&[-2, 1, -1])).unwrap();
        let _ = tree.add_file(tree.root(), "boot.php", &lines(&[1, 1])).unwrap();
        let _ = tree.add_directory(tree.root(), "lib").unwrap();
        tree
    }

    fn renderer(dir: &TempDir) -> PageRenderer {
        let config = ReportConfig::new().with_target(dir.path()).with_title("Unit");
        PageRenderer::new(&config).unwrap().with_date("2024-01-01 00:00:00")
    }

    #[test]
    fn test_summary_rows_directories_first() {
        let tree = sample_tree();
        let rows = summary_rows(&tree, tree.root());
        let links: Vec<&str> = rows.iter().map(|r| r.link.as_str()).collect();

        assert_eq!(
            links,
            vec![
                r#"<a href="src.html">src</a>"#,
                r#"<a href="lib.html">lib</a>"#,
                r#"<a href="boot.php.html">boot.php</a>"#,
            ]
        );
        assert_eq!(rows[0].severity, Severity::Medium);
        assert_eq!(rows[1].severity, Severity::Low);
        assert_eq!(rows[2].severity, Severity::High);
    }

    #[test]
    fn test_render_writes_every_page() {
        let dir = TempDir::new().unwrap();
        let tree = sample_tree();

        let pages = renderer(&dir).render(&tree, tree.root().into()).unwrap();
        assert_eq!(pages, 5);
        for name in ["index.html", "src.html", "src_a.php.html", "boot.php.html", "lib.html"] {
            assert!(dir.path().join(name).is_file(), "missing {name}");
        }
    }

    #[test]
    fn test_directory_page_content() {
        let dir = TempDir::new().unwrap();
        let tree = sample_tree();
        let _ = renderer(&dir).render(&tree, tree.root().into()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("src.html")).unwrap();
        assert!(html.contains("<title>Unit</title>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains(r#"<a href="index.html">project</a>/<a href="src.html">src</a>"#));
        assert!(html.contains(r#"class="butter bar-fill" style="width: 50%""#));
        assert!(html.contains(r#"class="bar-empty" style="width: 50%""#));
        assert!(html.contains("50.00%"));
        assert!(html.contains(">Med<"));
        assert!(html.contains("Lo: 0% to 35%"));
        assert!(html.contains("Hi: 70% to 100%"));
        assert!(html.contains("2024-01-01 00:00:00"));
        assert!(!html.contains("{items}"));
    }

    #[test]
    fn test_root_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let tree = sample_tree();
        let _ = renderer(&dir).render(&tree, tree.root().into()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        let src = html.find(r#"href="src.html""#).unwrap();
        let lib = html.find(r#"href="lib.html""#).unwrap();
        let boot = html.find(r#"href="boot.php.html""#).unwrap();
        assert!(src < lib && lib < boot);
    }

    #[test]
    fn test_file_page_lists_lines() {
        let dir = TempDir::new().unwrap();
        let tree = sample_tree();
        let _ = renderer(&dir).render(&tree, tree.root().into()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("src_a.php.html")).unwrap();
        assert!(html.contains(r#"<tr class="lineDeadCode"><td class="number">1</td>"#));
        assert!(html.contains(r#"<tr class="lineCov"><td class="number">2</td>"#));
        assert!(html.contains(r#"<tr class="lineNoCov"><td class="number">3</td>"#));
    }

    #[test]
    fn test_template_override() {
        let dir = TempDir::new().unwrap();
        let templates = TempDir::new().unwrap();
        std::fs::write(
            templates.path().join(ITEM_TEMPLATE),
            "[{level}|{executed_width}|{not_executed_width}]",
        )
        .unwrap();

        let config = ReportConfig::new()
            .with_target(dir.path())
            .with_template_dir(templates.path());
        let tree = sample_tree();
        let _ = PageRenderer::new(&config)
            .unwrap()
            .render(&tree, tree.root().into())
            .unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("[Med|50|50][Lo|0|100][Hi|100|0]"));
    }

    #[test]
    fn test_unreadable_override_is_template_error() {
        let dir = TempDir::new().unwrap();
        let templates = TempDir::new().unwrap();
        std::fs::write(templates.path().join(FILE_TEMPLATE), [0xff, 0xfe, 0x00]).unwrap();

        let config = ReportConfig::new()
            .with_target(dir.path())
            .with_template_dir(templates.path());
        let err = PageRenderer::new(&config).unwrap_err();
        assert!(matches!(err, CovError::Template { .. }));
        assert!(err.to_string().contains(FILE_TEMPLATE));
    }

    #[test]
    fn test_title_and_charset_escaped() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig::new()
            .with_target(dir.path())
            .with_title("A<B & C")
            .with_charset(r#"UTF-8"><x"#);
        let tree = sample_tree();
        let _ = PageRenderer::new(&config)
            .unwrap()
            .render(&tree, tree.root().into())
            .unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("<title>A&lt;B &amp; C</title>"));
        assert!(html.contains(r#"<meta charset="UTF-8&quot;&gt;&lt;x">"#));
        assert!(!html.contains("A<B"));
    }

    #[test]
    fn test_write_failure_aborts() {
        let dir = TempDir::new().unwrap();
        let tree = sample_tree();
        // A directory where the src page should go makes that write fail
        std::fs::create_dir(dir.path().join("src.html")).unwrap();

        let err = renderer(&dir)
            .render(&tree, tree.root().into())
            .unwrap_err();
        assert!(matches!(err, CovError::Io(_)));
        assert!(dir.path().join("index.html").is_file());
        assert!(!dir.path().join("src_a.php.html").exists());
        assert!(!dir.path().join("boot.php.html").exists());
    }

    #[test]
    fn test_stylesheet_written() {
        let dir = TempDir::new().unwrap();
        renderer(&dir).write_stylesheet().unwrap();
        let css = std::fs::read_to_string(dir.path().join(STYLESHEET)).unwrap();
        assert!(css.contains(".scarlet_red"));
        assert!(css.contains(".chameleon"));
    }
}
