use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::affected::{Affected, AffectedFile, AffectedFolder};

/// Deduplicating container ordered by relative path.
///
/// Iteration order depends only on the set of relative paths inserted, never on
/// insertion order. When the same relative path is inserted twice the first value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T> {
    entries: BTreeMap<PathBuf, T>,
}

pub type OrderedFolderSet = OrderedSet<AffectedFolder>;
pub type OrderedFileSet = OrderedSet<AffectedFile>;

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> OrderedSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, relative_path: &Path) -> bool {
        self.entries.contains_key(relative_path)
    }

    pub fn remove(&mut self, relative_path: &Path) -> Option<T> {
        self.entries.remove(relative_path)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|_, value| keep(value));
    }

    pub fn iter(&self) -> btree_map::Values<'_, PathBuf, T> {
        self.entries.values()
    }

    pub fn relative_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }
}

impl<T: Affected> OrderedSet<T> {
    /// Returns `false` if an entry with the same relative path was already present.
    pub fn insert(&mut self, item: T) -> bool {
        match self.entries.entry(item.relative_path().to_path_buf()) {
            Entry::Vacant(slot) => {
                slot.insert(item);
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

impl<T: Affected> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Affected> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = btree_map::IntoValues<PathBuf, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = btree_map::Values<'a, PathBuf, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl<T: Serialize> Serialize for OrderedSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}
