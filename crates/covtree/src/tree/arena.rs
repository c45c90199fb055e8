//! The coverage tree arena
//!
//! Owns every node. Parents are referenced by handle, so ownership flows
//! strictly from the tree to its nodes and no reference cycles exist.

use super::id::{DirId, FileId, NodeId};
use super::line::LineCoverage;
use super::node::{child_id, CoverageStats, DirectoryNode, FileNode, NodeRef, ROOT_ID};
use crate::result::{CovError, CovResult};
use crate::text::safe_filename;
use std::collections::{BTreeMap, HashSet};
use tracing::trace;

/// Hierarchical line coverage for a source tree
///
/// The root directory is created together with the tree. Children are only
/// ever appended; there is no detach or move.
#[derive(Debug)]
pub struct CoverageTree {
    directories: Vec<DirectoryNode>,
    files: Vec<FileNode>,
    /// Page file stems in use, the root's included
    page_names: HashSet<String>,
}

impl CoverageTree {
    /// Create a tree whose root directory carries `root_name`
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            directories: vec![DirectoryNode::new(
                root_name.into(),
                ROOT_ID.to_string(),
                None,
            )],
            files: Vec::new(),
            page_names: HashSet::from([safe_filename(ROOT_ID)]),
        }
    }

    #[must_use]
    pub const fn root(&self) -> DirId {
        DirId::new(0)
    }

    /// # Panics
    ///
    /// Panics if `id` was issued by a different tree.
    #[must_use]
    pub fn directory(&self, id: DirId) -> &DirectoryNode {
        &self.directories[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` was issued by a different tree.
    #[must_use]
    pub fn file(&self, id: FileId) -> &FileNode {
        &self.files[id.index()]
    }

    /// View any node
    #[must_use]
    pub fn node(&self, id: impl Into<NodeId>) -> NodeRef<'_> {
        NodeRef::new(self, id.into())
    }

    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Attach a new, empty directory below `parent`
    ///
    /// An empty directory sums to zero, so cached aggregates stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`CovError::InvalidInput`] for an empty name or a name already
    /// used by a sibling, or when the new node's page file name is already
    /// taken anywhere in the tree.
    pub fn add_directory(&mut self, parent: DirId, name: impl Into<String>) -> CovResult<DirId> {
        let name = name.into();
        let id = self.claim_child_name(parent, &name)?;

        let dir = DirId::new(self.directories.len() as u32);
        self.directories
            .push(DirectoryNode::new(name, id, Some(parent)));

        let parent_node = &mut self.directories[parent.index()];
        parent_node.children.push(dir.into());
        parent_node.directories.push(dir);

        trace!(directory = %self.directories[dir.index()].id, "directory attached");
        Ok(dir)
    }

    /// Attach a new file below `parent`
    ///
    /// `lines` maps 1-based line numbers to status codes (see
    /// [`LineStatus`](super::LineStatus)). Aggregates of `parent` and every
    /// ancestor are invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`CovError::InvalidInput`] when the line data is malformed, the
    /// name is empty, a sibling already uses the name, or the page file name
    /// is taken elsewhere in the tree. The tree is left unchanged on error.
    pub fn add_file(
        &mut self,
        parent: DirId,
        name: impl Into<String>,
        lines: &BTreeMap<i64, i64>,
    ) -> CovResult<FileId> {
        let name = name.into();
        let lines = LineCoverage::from_codes(lines)
            .map_err(|e| CovError::invalid_input(format!("file '{name}': {e}")))?;
        let id = self.claim_child_name(parent, &name)?;

        let file = FileId::new(self.files.len() as u32);
        self.files.push(FileNode::new(name, id, parent, lines));

        let parent_node = &mut self.directories[parent.index()];
        parent_node.children.push(file.into());
        parent_node.files.push(file);

        self.invalidate_from(parent);

        trace!(file = %self.files[file.index()].id, "file attached");
        Ok(file)
    }

    /// Executable lines of a node; directories sum their children
    #[must_use]
    pub fn num_executable_lines(&self, id: impl Into<NodeId>) -> usize {
        match id.into() {
            NodeId::File(f) => self.file(f).num_executable_lines(),
            NodeId::Directory(d) => {
                let dir = self.directory(d);
                if let Some(cached) = dir.num_executable_lines.get() {
                    return cached;
                }
                let sum = dir
                    .children
                    .iter()
                    .map(|&child| self.num_executable_lines(child))
                    .sum();
                dir.num_executable_lines.set(Some(sum));
                sum
            }
        }
    }

    /// Executed lines of a node; directories sum their children
    #[must_use]
    pub fn num_executed_lines(&self, id: impl Into<NodeId>) -> usize {
        match id.into() {
            NodeId::File(f) => self.file(f).num_executed_lines(),
            NodeId::Directory(d) => {
                let dir = self.directory(d);
                if let Some(cached) = dir.num_executed_lines.get() {
                    return cached;
                }
                let sum = dir
                    .children
                    .iter()
                    .map(|&child| self.num_executed_lines(child))
                    .sum();
                dir.num_executed_lines.set(Some(sum));
                sum
            }
        }
    }

    #[must_use]
    pub fn executed_percent(&self, id: impl Into<NodeId>) -> f64 {
        self.node(id).executed_percent()
    }

    fn claim_child_name(&mut self, parent: DirId, name: &str) -> CovResult<String> {
        if name.is_empty() {
            return Err(CovError::invalid_input("node name must not be empty"));
        }

        let parent_node = &self.directories[parent.index()];
        if parent_node.has_child(name) {
            return Err(CovError::invalid_input(format!(
                "'{}' already contains a node named '{name}'",
                parent_node.name
            )));
        }

        let prefix = (parent != self.root()).then_some(parent_node.id.as_str());
        let id = child_id(prefix, name);
        let page = safe_filename(&id);
        if self.page_names.contains(&page) {
            return Err(CovError::invalid_input(format!(
                "'{name}' in '{}' would be written to {page}.html, which another node already uses",
                parent_node.name
            )));
        }

        let _ = self.page_names.insert(page);
        let _ = self.directories[parent.index()]
            .child_names
            .insert(name.to_string());
        Ok(id)
    }

    /// Forget cached aggregates of `start` and all of its ancestors
    fn invalidate_from(&self, start: DirId) {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            let dir = self.directory(id);
            dir.invalidate();
            cursor = dir.parent;
        }
    }
}
