//! Directory and file nodes

use super::id::{DirId, FileId, NodeId};
use super::line::LineCoverage;
use super::CoverageTree;
use crate::text::{escape_html, safe_filename};
use std::cell::Cell;
use std::collections::HashSet;

/// Line coverage statistics of a node
pub trait CoverageStats {
    /// Number of lines that can be covered
    fn num_executable_lines(&self) -> usize;

    /// Number of executable lines that ran
    fn num_executed_lines(&self) -> usize;

    /// Executed share of executable lines, in percent
    ///
    /// A node with no executable lines reports `0.0`.
    fn executed_percent(&self) -> f64 {
        let executable = self.num_executable_lines();
        if executable == 0 {
            return 0.0;
        }
        self.num_executed_lines() as f64 / executable as f64 * 100.0
    }
}

/// Id of the root page
pub(crate) const ROOT_ID: &str = "index";

/// Derive the id of a child from its parent's id
///
/// `parent_id` is `None` when the parent is the root.
pub(crate) fn child_id(parent_id: Option<&str>, name: &str) -> String {
    match parent_id {
        None => name.to_string(),
        Some(parent_id) => format!("{parent_id}_{name}"),
    }
}

/// Internal node: an ordered list of children with memoized aggregates
#[derive(Debug)]
pub struct DirectoryNode {
    pub(crate) name: String,
    pub(crate) id: String,
    pub(crate) parent: Option<DirId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) directories: Vec<DirId>,
    pub(crate) files: Vec<FileId>,
    pub(crate) child_names: HashSet<String>,
    pub(crate) num_executable_lines: Cell<Option<usize>>,
    pub(crate) num_executed_lines: Cell<Option<usize>>,
}

impl DirectoryNode {
    pub(crate) fn new(name: String, id: String, parent: Option<DirId>) -> Self {
        Self {
            name,
            id,
            parent,
            children: Vec::new(),
            directories: Vec::new(),
            files: Vec::new(),
            child_names: HashSet::new(),
            num_executable_lines: Cell::new(None),
            num_executed_lines: Cell::new(None),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Page identifier, unique within a report
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Enclosing directory, `None` for the root
    #[must_use]
    pub const fn parent(&self) -> Option<DirId> {
        self.parent
    }

    /// All children in attachment order
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Child directories in attachment order
    #[must_use]
    pub fn directories(&self) -> &[DirId] {
        &self.directories
    }

    /// Child files in attachment order
    #[must_use]
    pub fn files(&self) -> &[FileId] {
        &self.files
    }

    #[must_use]
    pub fn has_child(&self, name: &str) -> bool {
        self.child_names.contains(name)
    }

    /// Whether both aggregates are currently cached
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.num_executable_lines.get().is_some() && self.num_executed_lines.get().is_some()
    }

    pub(crate) fn invalidate(&self) {
        self.num_executable_lines.set(None);
        self.num_executed_lines.set(None);
    }
}

/// Leaf node holding one source file's line coverage
#[derive(Debug, Clone)]
pub struct FileNode {
    pub(crate) name: String,
    pub(crate) id: String,
    pub(crate) parent: DirId,
    pub(crate) lines: LineCoverage,
    num_executable_lines: usize,
    num_executed_lines: usize,
}

impl FileNode {
    pub(crate) fn new(name: String, id: String, parent: DirId, lines: LineCoverage) -> Self {
        let num_executable_lines = lines.num_executable_lines();
        let num_executed_lines = lines.num_executed_lines();
        Self {
            name,
            id,
            parent,
            lines,
            num_executable_lines,
            num_executed_lines,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Page identifier, unique within a report
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn parent(&self) -> DirId {
        self.parent
    }

    #[must_use]
    pub const fn lines(&self) -> &LineCoverage {
        &self.lines
    }
}

impl CoverageStats for FileNode {
    fn num_executable_lines(&self) -> usize {
        self.num_executable_lines
    }

    fn num_executed_lines(&self) -> usize {
        self.num_executed_lines
    }
}

/// Borrowed view of a node inside its tree
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a CoverageTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) const fn new(tree: &'a CoverageTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Arena handle of this node
    #[must_use]
    pub const fn handle(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub const fn tree(&self) -> &'a CoverageTree {
        self.tree
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        match self.id {
            NodeId::Directory(d) => self.tree.directory(d).name(),
            NodeId::File(f) => self.tree.file(f).name(),
        }
    }

    /// Page identifier, unique within a report
    #[must_use]
    pub fn id(&self) -> &'a str {
        match self.id {
            NodeId::Directory(d) => self.tree.directory(d).id(),
            NodeId::File(f) => self.tree.file(f).id(),
        }
    }

    #[must_use]
    pub fn parent(&self) -> Option<DirId> {
        match self.id {
            NodeId::Directory(d) => self.tree.directory(d).parent(),
            NodeId::File(f) => Some(self.tree.file(f).parent()),
        }
    }

    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.id.is_directory()
    }

    /// Name of the page this node renders to
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.html", safe_filename(self.id()))
    }

    /// Hyperlink to this node's page
    ///
    /// With `full` set, links of all ancestors are prepended, separated by
    /// `/`, producing a breadcrumb.
    #[must_use]
    pub fn link(&self, full: bool) -> String {
        let name = self.name();
        let name = name.strip_suffix('/').unwrap_or(name);
        let own = format!(
            r#"<a href="{}">{}</a>"#,
            self.file_name(),
            escape_html(name)
        );

        match self.parent() {
            Some(parent) if full => {
                format!("{}/{}", self.tree.node(parent).link(true), own)
            }
            _ => own,
        }
    }
}

impl CoverageStats for NodeRef<'_> {
    fn num_executable_lines(&self) -> usize {
        self.tree.num_executable_lines(self.id)
    }

    fn num_executed_lines(&self) -> usize {
        self.tree.num_executed_lines(self.id)
    }
}
