use std::fs;
use std::path::Path;

use pcsync_core::{AffectedFile, AffectedFolder, OrderedFileSet, OrderedFolderSet};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::classify::{is_script, is_test};
use crate::{Result, WorkspaceError};

/// Visits every non-directory entry below `workspace`.
///
/// Only a failure to enumerate the root itself is an error. Entries deeper in the
/// tree that fail (permissions, concurrent deletion) are logged and skipped.
fn for_each_file(workspace: &Path, mut visit: impl FnMut(&Path)) -> Result<()> {
    fs::read_dir(workspace).map_err(|source| WorkspaceError::RootUnreadable {
        path: workspace.to_path_buf(),
        source,
    })?;

    for entry in WalkDir::new(workspace).follow_links(false) {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() {
                    visit(entry.path());
                }
            }
            Err(source) if source.depth() == 0 => {
                return Err(WorkspaceError::Walk {
                    path: workspace.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                warn!("skipping unreadable entry in '{}': {e}", workspace.display());
            }
        }
    }

    Ok(())
}

/// Collects the folder of every script in the workspace.
///
/// # Errors
///
/// Returns [`WorkspaceError`] if the workspace root cannot be enumerated.
pub fn scan_all_scripts(workspace: &Path) -> Result<OrderedFolderSet> {
    let mut result = OrderedFolderSet::new();

    for_each_file(workspace, |file| {
        if !is_script(file) {
            return;
        }
        if let Some(folder) = file
            .parent()
            .and_then(|parent| AffectedFolder::new(parent, workspace))
        {
            result.insert(folder);
        }
    })?;

    debug!(
        "found {} script folder(s) in '{}'",
        result.len(),
        workspace.display()
    );

    Ok(result)
}

/// Collects every test definition in the workspace.
///
/// # Errors
///
/// Returns [`WorkspaceError`] if the workspace root cannot be enumerated.
pub fn scan_all_tests(workspace: &Path, consider_xml_as_test: bool) -> Result<OrderedFileSet> {
    let mut result = OrderedFileSet::new();

    for_each_file(workspace, |file| {
        if !is_test(file, workspace, consider_xml_as_test) {
            return;
        }
        if let Some(test) = AffectedFile::new(file, workspace) {
            result.insert(test);
        }
    })?;

    debug!(
        "found {} test(s) in '{}'",
        result.len(),
        workspace.display()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn relative(set: &OrderedFolderSet) -> Vec<PathBuf> {
        set.relative_paths().map(Path::to_path_buf).collect()
    }

    #[test]
    fn reports_containing_folder_once() -> anyhow::Result<()> {
        let dir = workspace_with(&[
            "login/UC.usr",
            "login/UC.c",
            "login/data/users.dat",
            "api/plan.jmx",
            "api/other.jmx",
            "docs/readme.md",
        ])?;

        let scripts = scan_all_scripts(dir.path())?;

        assert_eq!(
            relative(&scripts),
            vec![PathBuf::from("api"), PathBuf::from("login")]
        );

        Ok(())
    }

    #[test]
    fn script_in_root_produces_no_folder() -> anyhow::Result<()> {
        let dir = workspace_with(&["root.jmx", "nested/deep/sim.scala"])?;

        let scripts = scan_all_scripts(dir.path())?;

        assert_eq!(relative(&scripts), vec![PathBuf::from("nested/deep")]);

        Ok(())
    }

    #[test]
    fn scanning_twice_is_idempotent() -> anyhow::Result<()> {
        let dir = workspace_with(&["b/UC.usr", "a/plan.jmx", "c/d/e/sim.scala"])?;

        let first = scan_all_scripts(dir.path())?;
        let second = scan_all_scripts(dir.path())?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn missing_root_is_an_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let missing = dir.path().join("nope");

        let result = scan_all_scripts(&missing);

        assert!(matches!(result, Err(WorkspaceError::RootUnreadable { .. })));

        Ok(())
    }

    #[test]
    fn tests_scan_skips_root_and_script_folders() -> anyhow::Result<()> {
        let dir = workspace_with(&[
            "root.yaml",
            "suite/load.yaml",
            "suite/legacy.xml",
            "script/UC.usr",
            "script/conf/inner.yml",
        ])?;

        let tests = scan_all_tests(dir.path(), false)?;
        let names: Vec<_> = tests.relative_paths().map(Path::to_path_buf).collect();
        assert_eq!(names, vec![PathBuf::from("suite/load.yaml")]);

        let with_xml = scan_all_tests(dir.path(), true)?;
        assert_eq!(with_xml.len(), 2);
        assert!(with_xml.contains(Path::new("suite/legacy.xml")));

        Ok(())
    }
}
