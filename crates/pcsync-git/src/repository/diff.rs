use std::path::PathBuf;

use git2::{Delta, DiffFile, DiffFindOptions};
use pcsync_core::ModifiedFile;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Lists the files that differ between `base` and `head` as absolute paths under
    /// [`Repository::root`].
    ///
    /// A rename vacates its old location, so it is reported as a deletion of the old
    /// path followed by an addition of the new one. Copies are additions and type
    /// changes are modifications.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either revision cannot be resolved.
    pub fn modified_files(&self, base: &str, head: &str) -> Result<Vec<ModifiedFile>> {
        let base_tree = self.resolve_tree(base)?;
        let head_tree = self.resolve_tree(head)?;

        let mut diff = self
            .inner
            .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;
        diff.find_similar(Some(DiffFindOptions::new().renames(true).copies(true)))?;

        let mut records = Vec::with_capacity(diff.deltas().len());

        for delta in diff.deltas() {
            match delta.status() {
                Delta::Added | Delta::Copied => {
                    records.push(ModifiedFile::added(self.full_path(&delta.new_file())?));
                }
                Delta::Modified | Delta::Typechange => {
                    records.push(ModifiedFile::modified(self.full_path(&delta.new_file())?));
                }
                Delta::Deleted => {
                    records.push(ModifiedFile::deleted(self.full_path(&delta.old_file())?));
                }
                Delta::Renamed => {
                    records.push(ModifiedFile::deleted(self.full_path(&delta.old_file())?));
                    records.push(ModifiedFile::added(self.full_path(&delta.new_file())?));
                }
                _ => {}
            }
        }

        Ok(records)
    }

    fn full_path(&self, file: &DiffFile<'_>) -> Result<PathBuf> {
        file.path()
            .map(|relative| self.root.join(relative))
            .ok_or(GitError::MissingDeltaPath)
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        self.inner
            .revparse_single(refspec)
            .and_then(|obj| obj.peel_to_tree())
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })
    }
}
