use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::{OperationError, Result};

pub const CONFIG_FILE_NAME: &str = ".pcsync.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UploadScriptMode {
    /// Upload every script folder in the workspace
    All,
    /// Upload only script folders touched since the base revision
    #[default]
    Modified,
}

impl fmt::Display for UploadScriptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Modified => "modified",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ConfigFile {
    upload_script_mode: Option<UploadScriptMode>,
    remove_deleted_scripts: Option<bool>,
    import_tests: Option<bool>,
    consider_xml_as_tests: Option<bool>,
    #[serde(default)]
    ignored_files: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    upload_script_mode: UploadScriptMode,
    remove_deleted_scripts: bool,
    import_tests: bool,
    consider_xml_as_tests: bool,
    ignored_files: GlobSet,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            upload_script_mode: UploadScriptMode::default(),
            remove_deleted_scripts: true,
            import_tests: true,
            consider_xml_as_tests: false,
            ignored_files: GlobSet::empty(),
        }
    }
}

impl SyncConfig {
    #[must_use]
    pub fn upload_script_mode(&self) -> UploadScriptMode {
        self.upload_script_mode
    }

    #[must_use]
    pub fn remove_deleted_scripts(&self) -> bool {
        self.remove_deleted_scripts
    }

    #[must_use]
    pub fn import_tests(&self) -> bool {
        self.import_tests
    }

    #[must_use]
    pub fn consider_xml_as_tests(&self) -> bool {
        self.consider_xml_as_tests
    }

    /// `relative_path` is relative to the workspace root.
    #[must_use]
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        self.ignored_files.is_match(relative_path)
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_upload_script_mode(mut self, mode: UploadScriptMode) -> Self {
        self.upload_script_mode = mode;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_remove_deleted_scripts(mut self, remove: bool) -> Self {
        self.remove_deleted_scripts = remove;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_import_tests(mut self, import: bool) -> Self {
        self.import_tests = import;
        self
    }

    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid glob.
    #[cfg(test)]
    pub fn with_ignored_files(mut self, patterns: &[String]) -> Result<Self> {
        self.ignored_files = build_glob_set(patterns)?;
        Ok(self)
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| OperationError::GlobPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| OperationError::GlobPattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// Parses the contents of a config file. `path` is only used for error reporting.
///
/// # Errors
///
/// Returns an error if the TOML is malformed, has unknown keys, or contains invalid
/// glob patterns.
pub fn parse_sync_config(content: &str, path: &Path) -> Result<SyncConfig> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| OperationError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    let defaults = SyncConfig::default();

    Ok(SyncConfig {
        upload_script_mode: file
            .upload_script_mode
            .unwrap_or(defaults.upload_script_mode),
        remove_deleted_scripts: file
            .remove_deleted_scripts
            .unwrap_or(defaults.remove_deleted_scripts),
        import_tests: file.import_tests.unwrap_or(defaults.import_tests),
        consider_xml_as_tests: file
            .consider_xml_as_tests
            .unwrap_or(defaults.consider_xml_as_tests),
        ignored_files: build_glob_set(&file.ignored_files)?,
    })
}

/// Loads `.pcsync.toml` from the workspace root. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_sync_config(workspace: &Path) -> Result<SyncConfig> {
    let path = workspace.join(CONFIG_FILE_NAME);

    match std::fs::read_to_string(&path) {
        Ok(content) => parse_sync_config(&content, &path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SyncConfig::default()),
        Err(source) => Err(OperationError::ConfigRead { path, source }),
    }
}
