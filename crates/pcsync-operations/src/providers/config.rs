use std::path::Path;

use crate::Result;
use crate::config::{SyncConfig, load_sync_config};
use crate::traits::ConfigProvider;

pub struct FileSystemConfigProvider;

impl FileSystemConfigProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for FileSystemConfigProvider {
    fn load_config(&self, workspace: &Path) -> Result<SyncConfig> {
        load_sync_config(workspace)
    }
}
