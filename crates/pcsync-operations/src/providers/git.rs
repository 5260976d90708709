use std::path::Path;

use pcsync_core::ModifiedFile;
use pcsync_git::Repository;
use tracing::debug;

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn modified_files(
        &self,
        workspace: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<ModifiedFile>> {
        let repo = Repository::open(workspace)?;
        let changes = repo.modified_files(base, head)?;
        debug!(
            "{} change(s) between '{base}' and '{head}' in '{}'",
            changes.len(),
            repo.root().display()
        );
        Ok(changes)
    }
}
