//! Build a coverage tree from per-file coverage
//!
//! ```text
//! /work/src/a.php          root "/work/src"
//! /work/src/util/s.php  →  ├── util/
//! /work/src/b.php          │   └── s.php
//!                          ├── a.php
//!                          └── b.php
//! ```
//!
//! The common directory of all paths becomes the root. At every level
//! sub-directories are attached before files, each sorted by name.

use super::SourceCoverage;
use crate::result::{CovError, CovResult};
use crate::tree::{CoverageTree, DirId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default)]
struct Level {
    directories: BTreeMap<String, Level>,
    files: BTreeMap<String, BTreeMap<i64, i64>>,
}

fn components(path: &Path) -> Vec<String> {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}

/// Number of leading directory components shared by every path
fn common_prefix_len(paths: &[Vec<String>]) -> usize {
    let Some((first, rest)) = paths.split_first() else {
        return 0;
    };
    let mut len = first.len().saturating_sub(1);
    for other in rest {
        let dirs = other.len().saturating_sub(1);
        len = first
            .iter()
            .zip(other.iter())
            .take(len.min(dirs))
            .take_while(|(a, b)| a == b)
            .count();
    }
    len
}

/// Build a tree from per-file coverage
///
/// # Errors
///
/// Returns [`CovError::InvalidInput`] for an empty path, a path given
/// twice, or malformed line data.
pub fn build_tree(files: Vec<SourceCoverage>) -> CovResult<CoverageTree> {
    let split: Vec<Vec<String>> = files.iter().map(|f| components(&f.path)).collect();
    if let Some(pos) = split.iter().position(Vec::is_empty) {
        return Err(CovError::invalid_input(format!(
            "empty source path at position {pos}"
        )));
    }

    let prefix = common_prefix_len(&split);
    let root_name = if prefix == 0 {
        ".".to_string()
    } else {
        split[0][..prefix]
            .iter()
            .collect::<PathBuf>()
            .display()
            .to_string()
    };
    debug!(root = %root_name, files = files.len(), "building coverage tree");

    let mut top = Level::default();
    for (parts, file) in split.into_iter().zip(files) {
        let relative = &parts[prefix..];
        let Some((name, dirs)) = relative.split_last() else {
            continue;
        };

        let mut level = &mut top;
        for dir in dirs {
            level = level.directories.entry(dir.clone()).or_default();
        }
        if level.files.insert(name.clone(), file.lines).is_some() {
            return Err(CovError::invalid_input(format!(
                "source path {} given twice",
                file.path.display()
            )));
        }
    }

    let mut tree = CoverageTree::new(root_name);
    let root = tree.root();
    attach(&mut tree, root, top)?;
    Ok(tree)
}

fn attach(tree: &mut CoverageTree, parent: DirId, level: Level) -> CovResult<()> {
    for (name, sub) in level.directories {
        let dir = tree.add_directory(parent, name)?;
        attach(tree, dir, sub)?;
    }
    for (name, lines) in level.files {
        let _ = tree.add_file(parent, name, &lines)?;
    }
    Ok(())
}
