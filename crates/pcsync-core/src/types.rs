use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
        };
        write!(f, "{s}")
    }
}

/// A change reported by a change-detection source such as a version-control diff.
///
/// `full_path` is absolute. For [`ChangeKind::Deleted`] it usually no longer exists on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModifiedFile {
    pub full_path: PathBuf,
    pub kind: ChangeKind,
}

impl ModifiedFile {
    #[must_use]
    pub fn new(full_path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            full_path: full_path.into(),
            kind,
        }
    }

    #[must_use]
    pub fn added(full_path: impl Into<PathBuf>) -> Self {
        Self::new(full_path, ChangeKind::Added)
    }

    #[must_use]
    pub fn modified(full_path: impl Into<PathBuf>) -> Self {
        Self::new(full_path, ChangeKind::Modified)
    }

    #[must_use]
    pub fn deleted(full_path: impl Into<PathBuf>) -> Self {
        Self::new(full_path, ChangeKind::Deleted)
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.kind == ChangeKind::Deleted
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Path> {
        self.full_path.parent()
    }
}
