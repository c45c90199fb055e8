//! Coverage tree
//!
//! A tree mirroring a source tree's directory/file structure. File nodes
//! carry per-line coverage; directory nodes aggregate their children lazily
//! and memoize the result.
//!
//! ```text
//! index (root)
//! ├── src            executable = 2, executed = 1
//! │   └── a.php      executable = 2, executed = 1
//! └── lib            executable = 0, executed = 0
//! ```
//!
//! Attaching a file invalidates the cached aggregates of its directory and
//! every ancestor, so reads are correct in any order.

mod arena;
mod id;
mod line;
mod node;

pub use arena::CoverageTree;
pub use id::{DirId, FileId, NodeId};
pub use line::{LineCoverage, LineStatus};
pub use node::{CoverageStats, DirectoryNode, FileNode, NodeRef};
