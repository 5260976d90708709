use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classify::contains_script;

/// Walks up from `start_dir` to the first directory that directly contains a script.
///
/// `start_dir` itself is examined first. The workspace root is never examined, and a
/// `start_dir` outside the workspace yields `None`. Levels that cannot be listed are
/// skipped.
#[must_use]
pub fn nearest_script_folder(start_dir: &Path, workspace: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        if current == workspace || !current.starts_with(workspace) {
            return None;
        }

        if contains_script(current) {
            debug!("script folder for '{}' is '{}'", start_dir.display(), current.display());
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}

/// Finds the nearest folder above `path` that holds a script, stopping below the root.
#[must_use]
pub fn find_owning_script_folder(path: &Path, workspace: &Path) -> Option<PathBuf> {
    if path == workspace {
        return None;
    }

    nearest_script_folder(path.parent()?, workspace)
}

/// Returns `true` if some folder between `path` and the workspace root holds a script.
#[must_use]
pub fn is_under_script_folder(path: &Path, workspace: &Path) -> bool {
    find_owning_script_folder(path, workspace).is_some()
}
