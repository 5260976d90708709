use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pcsync_core::ModifiedFile;

use crate::Result;
use crate::config::SyncConfig;
use crate::traits::{ConfigProvider, GitProvider};

#[derive(Default)]
pub struct MockGitProvider {
    modified_files: Vec<ModifiedFile>,
    requested: Mutex<Vec<(PathBuf, String, String)>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_modified_files(mut self, files: Vec<ModifiedFile>) -> Self {
        self.modified_files = files;
        self
    }

    /// Every `(workspace, base, head)` the provider was asked to diff.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn requested(&self) -> Vec<(PathBuf, String, String)> {
        self.requested.lock().expect("mutex poisoned").clone()
    }
}

impl GitProvider for MockGitProvider {
    fn modified_files(
        &self,
        workspace: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<ModifiedFile>> {
        self.requested.lock().expect("mutex poisoned").push((
            workspace.to_path_buf(),
            base.to_string(),
            head.to_string(),
        ));
        Ok(self.modified_files.clone())
    }
}

#[derive(Default)]
pub struct MockConfigProvider {
    config: SyncConfig,
}

impl MockConfigProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for MockConfigProvider {
    fn load_config(&self, _workspace: &Path) -> Result<SyncConfig> {
        Ok(self.config.clone())
    }
}
