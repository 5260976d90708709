use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::path::{Component, Path, PathBuf};

use serde::{Serialize, Serializer};

/// A path identified by its location relative to the workspace root.
///
/// Identity, ordering and deduplication in [`crate::OrderedSet`] use the relative path only.
pub trait Affected {
    fn relative_path(&self) -> &Path;
}

/// Strips `workspace` from `full_path` and normalizes the remainder.
///
/// Returns `None` for the workspace root itself, for paths outside it and for paths
/// that climb back out through `..`.
fn relativize(full_path: &Path, workspace: &Path) -> Option<PathBuf> {
    let relative = full_path.strip_prefix(workspace).ok()?;

    let mut normalized = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if normalized.as_os_str().is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Renders a relative path with `/` separators regardless of platform.
#[must_use]
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

macro_rules! relative_identity {
    ($ty:ident) => {
        impl Affected for $ty {
            fn relative_path(&self) -> &Path {
                &self.relative_path
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.relative_path == other.relative_path
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                self.relative_path.cmp(&other.relative_path)
            }
        }

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.relative_path.hash(state);
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&to_slash_path(&self.relative_path))
            }
        }
    };
}

/// A folder under the workspace root that is affected by a change or holds a script.
#[derive(Debug, Clone)]
pub struct AffectedFolder {
    relative_path: PathBuf,
    full_path: PathBuf,
}

impl AffectedFolder {
    /// Returns `None` unless `full_path` lies strictly under `workspace`.
    #[must_use]
    pub fn new(full_path: &Path, workspace: &Path) -> Option<Self> {
        relativize(full_path, workspace).map(|relative_path| Self {
            full_path: workspace.join(&relative_path),
            relative_path,
        })
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

relative_identity!(AffectedFolder);

/// A single file under the workspace root, never the root itself.
#[derive(Debug, Clone)]
pub struct AffectedFile {
    relative_path: PathBuf,
    full_path: PathBuf,
}

impl AffectedFile {
    /// Returns `None` unless `full_path` lies strictly under `workspace`.
    #[must_use]
    pub fn new(full_path: &Path, workspace: &Path) -> Option<Self> {
        relativize(full_path, workspace).map(|relative_path| Self {
            full_path: workspace.join(&relative_path),
            relative_path,
        })
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

relative_identity!(AffectedFile);
