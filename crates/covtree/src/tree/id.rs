//! Type-safe node handles
//!
//! Directories and files live in separate arenas owned by
//! [`CoverageTree`](super::CoverageTree). `DirId` and `FileId` are
//! intentionally NOT interchangeable: only a directory can receive children.
//! `NodeId` is the tagged union used wherever either variant may appear.

/// Handle to a directory node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirId(u32);

impl DirId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position in the directory arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a file node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position in the file arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to any node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// A directory
    Directory(DirId),
    /// A file
    File(FileId),
}

impl NodeId {
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory(_))
    }

    #[must_use]
    pub const fn as_directory(self) -> Option<DirId> {
        match self {
            Self::Directory(id) => Some(id),
            Self::File(_) => None,
        }
    }

    #[must_use]
    pub const fn as_file(self) -> Option<FileId> {
        match self {
            Self::File(id) => Some(id),
            Self::Directory(_) => None,
        }
    }
}

impl From<DirId> for NodeId {
    fn from(id: DirId) -> Self {
        Self::Directory(id)
    }
}

impl From<FileId> for NodeId {
    fn from(id: FileId) -> Self {
        Self::File(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        assert_eq!(DirId::new(7).index(), 7);
        assert_eq!(FileId::new(3).index(), 3);
    }

    #[test]
    fn test_node_id_variants() {
        let dir: NodeId = DirId::new(1).into();
        let file: NodeId = FileId::new(1).into();

        assert!(dir.is_directory());
        assert!(!file.is_directory());
        assert_eq!(dir.as_directory(), Some(DirId::new(1)));
        assert_eq!(dir.as_file(), None);
        assert_eq!(file.as_file(), Some(FileId::new(1)));
        assert_ne!(dir, file);
    }
}
