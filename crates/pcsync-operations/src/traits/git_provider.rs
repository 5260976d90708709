use std::path::Path;

use pcsync_core::ModifiedFile;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// Returns the changes between `base` and `head` as absolute change records.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or diff fails.
    fn modified_files(&self, workspace: &Path, base: &str, head: &str)
    -> Result<Vec<ModifiedFile>>;
}
