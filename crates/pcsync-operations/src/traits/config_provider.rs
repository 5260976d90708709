use std::path::Path;

use crate::Result;
use crate::config::SyncConfig;

pub trait ConfigProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the configuration exists but cannot be loaded.
    fn load_config(&self, workspace: &Path) -> Result<SyncConfig>;
}
