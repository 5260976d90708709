use std::path::Path;

use pcsync_core::{ModifiedFile, OrderedFileSet, OrderedFolderSet};
use pcsync_workspace::{
    resolve_affected_files, resolve_change_set, resolve_tests_to_update, scan_all_scripts,
    scan_all_tests,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{SyncConfig, UploadScriptMode};
use crate::traits::{ConfigProvider, GitProvider};
use crate::{OperationError, Result};

#[derive(Debug, Default)]
pub struct PlanInput {
    pub base: Option<String>,
    pub head: Option<String>,
    pub mode: Option<UploadScriptMode>,
    pub consider_xml_as_tests: Option<bool>,
}

/// What a sync client has to do to bring the remote side in line with the workspace.
#[derive(Debug, Serialize)]
pub struct SyncPlan {
    pub mode: UploadScriptMode,
    pub upload: OrderedFolderSet,
    pub delete: OrderedFolderSet,
    pub tests: OrderedFileSet,
}

impl SyncPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upload.is_empty() && self.delete.is_empty() && self.tests.is_empty()
    }
}

pub struct PlanOperation<G, C> {
    git_provider: G,
    config_provider: C,
}

impl<G, C> PlanOperation<G, C>
where
    G: GitProvider,
    C: ConfigProvider,
{
    pub fn new(git_provider: G, config_provider: C) -> Self {
        Self {
            git_provider,
            config_provider,
        }
    }

    /// Plans the sync of `workspace`.
    ///
    /// The workspace path is canonicalized first so that it shares a prefix with the
    /// paths reported by git, which are rooted at the canonical working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace path does not resolve, the configuration cannot
    /// be loaded, the git diff fails, or the workspace root cannot be walked.
    pub fn execute(&self, workspace: &Path, input: &PlanInput) -> Result<SyncPlan> {
        let workspace = dunce::canonicalize(workspace).map_err(|source| {
            OperationError::WorkspacePath {
                path: workspace.to_path_buf(),
                source,
            }
        })?;
        let workspace = workspace.as_path();

        let config = self.config_provider.load_config(workspace)?;
        let mode = input.mode.unwrap_or(config.upload_script_mode());
        let consider_xml = input
            .consider_xml_as_tests
            .unwrap_or(config.consider_xml_as_tests());

        match (mode, input.base.as_deref()) {
            (UploadScriptMode::Modified, Some(base)) => {
                let head = input.head.as_deref().unwrap_or("HEAD");
                self.incremental_plan(workspace, &config, base, head, consider_xml)
            }
            (UploadScriptMode::Modified, None) => {
                info!("no base revision given, planning a full sync");
                full_plan(workspace, &config, consider_xml)
            }
            (UploadScriptMode::All, _) => full_plan(workspace, &config, consider_xml),
        }
    }

    fn incremental_plan(
        &self,
        workspace: &Path,
        config: &SyncConfig,
        base: &str,
        head: &str,
        consider_xml: bool,
    ) -> Result<SyncPlan> {
        let changes: Vec<ModifiedFile> = self
            .git_provider
            .modified_files(workspace, base, head)?
            .into_iter()
            .filter(|change| !is_ignored(config, workspace, change))
            .collect();

        let resolution = resolve_change_set(&changes, workspace);

        let delete = if config.remove_deleted_scripts() {
            resolution.delete
        } else {
            OrderedFolderSet::new()
        };

        let tests = if config.import_tests() {
            let affected_files = resolve_affected_files(&changes, workspace);
            resolve_tests_to_update(&affected_files, workspace, consider_xml)
        } else {
            OrderedFileSet::new()
        };

        Ok(SyncPlan {
            mode: UploadScriptMode::Modified,
            upload: resolution.upload,
            delete,
            tests,
        })
    }
}

fn full_plan(workspace: &Path, config: &SyncConfig, consider_xml: bool) -> Result<SyncPlan> {
    let upload = scan_all_scripts(workspace)?;

    let tests = if config.import_tests() {
        scan_all_tests(workspace, consider_xml)?
    } else {
        OrderedFileSet::new()
    };

    Ok(SyncPlan {
        mode: UploadScriptMode::All,
        upload,
        delete: OrderedFolderSet::new(),
        tests,
    })
}

fn is_ignored(config: &SyncConfig, workspace: &Path, change: &ModifiedFile) -> bool {
    let ignored = change
        .full_path
        .strip_prefix(workspace)
        .is_ok_and(|relative| config.is_ignored(relative));
    if ignored {
        debug!("ignoring change to '{}'", change.full_path.display());
    }
    ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockConfigProvider, MockGitProvider};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn workspace_with(files: &[&str]) -> anyhow::Result<TempDir> {
        let dir = TempDir::new()?;
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, "")?;
        }
        Ok(dir)
    }

    fn relative<'a>(paths: impl Iterator<Item = &'a Path>) -> Vec<PathBuf> {
        paths.map(Path::to_path_buf).collect()
    }

    fn incremental_input() -> PlanInput {
        PlanInput {
            base: Some("main".to_string()),
            ..PlanInput::default()
        }
    }

    #[test]
    fn full_plan_scans_scripts_and_tests() -> anyhow::Result<()> {
        let dir = workspace_with(&["login/UC.usr", "suites/load.yaml", "root.yaml"])?;
        let operation = PlanOperation::new(
            MockGitProvider::new(),
            MockConfigProvider::new()
                .with_config(SyncConfig::default().with_upload_script_mode(UploadScriptMode::All)),
        );

        let plan = operation.execute(dir.path(), &incremental_input())?;

        assert_eq!(plan.mode, UploadScriptMode::All);
        assert_eq!(
            relative(plan.upload.relative_paths()),
            vec![PathBuf::from("login")]
        );
        assert!(plan.delete.is_empty());
        assert_eq!(
            relative(plan.tests.relative_paths()),
            vec![PathBuf::from("suites/load.yaml")]
        );

        Ok(())
    }

    #[test]
    fn modified_mode_without_base_falls_back_to_full_plan() -> anyhow::Result<()> {
        let dir = workspace_with(&["api/plan.jmx"])?;
        let git_provider = MockGitProvider::new();
        let operation = PlanOperation::new(git_provider, MockConfigProvider::new());

        let plan = operation.execute(dir.path(), &PlanInput::default())?;

        assert_eq!(plan.mode, UploadScriptMode::All);
        assert_eq!(plan.upload.len(), 1);
        assert!(operation.git_provider.requested().is_empty());

        Ok(())
    }

    #[test]
    fn incremental_plan_resolves_upload_delete_and_tests() -> anyhow::Result<()> {
        let dir = workspace_with(&["a/UC.usr", "a/b/c/data.csv", "suites/load.yaml"])?;
        let ws = &dunce::canonicalize(dir.path())?;
        let git_provider = MockGitProvider::new().with_modified_files(vec![
            ModifiedFile::modified(ws.join("a/b/c/data.csv")),
            ModifiedFile::deleted(ws.join("gone/plan.jmx")),
            ModifiedFile::added(ws.join("suites/load.yaml")),
        ]);
        let operation = PlanOperation::new(git_provider, MockConfigProvider::new());

        let plan = operation.execute(ws, &incremental_input())?;

        assert_eq!(plan.mode, UploadScriptMode::Modified);
        assert_eq!(relative(plan.upload.relative_paths()), vec![PathBuf::from("a")]);
        assert_eq!(
            relative(plan.delete.relative_paths()),
            vec![PathBuf::from("gone")]
        );
        assert_eq!(
            relative(plan.tests.relative_paths()),
            vec![PathBuf::from("suites/load.yaml")]
        );
        assert_eq!(
            operation.git_provider.requested(),
            vec![(ws.to_path_buf(), "main".to_string(), "HEAD".to_string())]
        );

        Ok(())
    }

    #[test]
    fn head_override_is_passed_to_git() -> anyhow::Result<()> {
        let dir = workspace_with(&[])?;
        let operation = PlanOperation::new(MockGitProvider::new(), MockConfigProvider::new());
        let input = PlanInput {
            base: Some("v1".to_string()),
            head: Some("v2".to_string()),
            ..PlanInput::default()
        };

        let plan = operation.execute(dir.path(), &input)?;

        assert!(plan.is_empty());
        assert_eq!(operation.git_provider.requested()[0].2, "v2");

        Ok(())
    }

    #[test]
    fn disabled_options_leave_sections_empty() -> anyhow::Result<()> {
        let dir = workspace_with(&["suites/load.yaml"])?;
        let ws = &dunce::canonicalize(dir.path())?;
        let git_provider = MockGitProvider::new().with_modified_files(vec![
            ModifiedFile::deleted(ws.join("gone/plan.jmx")),
            ModifiedFile::modified(ws.join("suites/load.yaml")),
        ]);
        let config = SyncConfig::default()
            .with_remove_deleted_scripts(false)
            .with_import_tests(false);
        let operation =
            PlanOperation::new(git_provider, MockConfigProvider::new().with_config(config));

        let plan = operation.execute(ws, &incremental_input())?;

        assert!(plan.is_empty());

        Ok(())
    }

    #[test]
    fn ignored_changes_are_dropped() -> anyhow::Result<()> {
        let dir = workspace_with(&["a/UC.usr", "a/notes.md", "b/plan.jmx"])?;
        let ws = &dunce::canonicalize(dir.path())?;
        let git_provider = MockGitProvider::new().with_modified_files(vec![
            ModifiedFile::modified(ws.join("a/notes.md")),
            ModifiedFile::modified(ws.join("b/plan.jmx")),
        ]);
        let config = SyncConfig::default().with_ignored_files(&["**/*.md".to_string()])?;
        let operation =
            PlanOperation::new(git_provider, MockConfigProvider::new().with_config(config));

        let plan = operation.execute(ws, &incremental_input())?;

        assert_eq!(relative(plan.upload.relative_paths()), vec![PathBuf::from("b")]);

        Ok(())
    }

    #[test]
    fn input_overrides_xml_setting() -> anyhow::Result<()> {
        let dir = workspace_with(&["suites/legacy.xml"])?;
        let ws = &dunce::canonicalize(dir.path())?;
        let git_provider = MockGitProvider::new()
            .with_modified_files(vec![ModifiedFile::modified(ws.join("suites/legacy.xml"))]);
        let operation = PlanOperation::new(git_provider, MockConfigProvider::new());
        let input = PlanInput {
            consider_xml_as_tests: Some(true),
            ..incremental_input()
        };

        let plan = operation.execute(ws, &input)?;

        assert_eq!(plan.tests.len(), 1);

        Ok(())
    }

    #[test]
    fn missing_workspace_is_an_error() -> anyhow::Result<()> {
        let dir = workspace_with(&[])?;
        let missing = dir.path().join("not-there");
        let operation = PlanOperation::new(MockGitProvider::new(), MockConfigProvider::new());

        let result = operation.execute(&missing, &incremental_input());

        assert!(matches!(
            result,
            Err(OperationError::WorkspacePath { path, .. }) if path == missing
        ));
        assert!(operation.git_provider.requested().is_empty());

        Ok(())
    }

    #[test]
    fn git_is_asked_for_the_canonical_workspace() -> anyhow::Result<()> {
        let dir = workspace_with(&["login/UC.usr"])?;
        let ws = dunce::canonicalize(dir.path())?;
        let dotted = dir.path().join("login").join("..");
        let git_provider = MockGitProvider::new()
            .with_modified_files(vec![ModifiedFile::modified(ws.join("login/UC.usr"))]);
        let operation = PlanOperation::new(git_provider, MockConfigProvider::new());

        let plan = operation.execute(&dotted, &incremental_input())?;

        assert_eq!(operation.git_provider.requested()[0].0, ws);
        assert_eq!(relative(plan.upload.relative_paths()), vec![PathBuf::from("login")]);

        Ok(())
    }

    #[test]
    fn plan_serializes_relative_paths() -> anyhow::Result<()> {
        let dir = workspace_with(&["scripts/login/UC.usr"])?;
        let operation = PlanOperation::new(MockGitProvider::new(), MockConfigProvider::new());

        let plan = operation.execute(dir.path(), &PlanInput::default())?;
        let json = serde_json::to_value(&plan)?;

        assert_eq!(json["mode"], "all");
        assert_eq!(json["upload"][0], "scripts/login");
        assert_eq!(json["delete"].as_array().map(Vec::len), Some(0));

        Ok(())
    }
}
