use std::path::Path;

use pcsync_core::{AffectedFolder, ModifiedFile, OrderedFolderSet};
use tracing::debug;

use crate::ancestor::nearest_script_folder;
use crate::classify::is_script_by_extension;

/// Folders touched by a change set, split by what the sync client must do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSetResolution {
    pub affected: OrderedFolderSet,
    pub upload: OrderedFolderSet,
    pub delete: OrderedFolderSet,
}

/// Returns the parent folder of every change, whatever its kind.
///
/// Changes directly under the workspace root contribute nothing.
#[must_use]
pub fn resolve_affected_folders<'a, I>(changes: I, workspace: &Path) -> OrderedFolderSet
where
    I: IntoIterator<Item = &'a ModifiedFile>,
{
    changes
        .into_iter()
        .filter_map(ModifiedFile::parent)
        .filter_map(|parent| AffectedFolder::new(parent, workspace))
        .collect()
}

/// Maps each affected folder to the script folder that owns it.
///
/// A changed data file may sit several levels below its script, so each folder is
/// ascended until a folder holding a script is found. Folders without an owning
/// script are dropped.
#[must_use]
pub fn upload_targets_for_folders(
    affected_folders: &OrderedFolderSet,
    workspace: &Path,
) -> OrderedFolderSet {
    affected_folders
        .iter()
        .filter_map(|folder| nearest_script_folder(folder.full_path(), workspace))
        .filter_map(|script_folder| AffectedFolder::new(&script_folder, workspace))
        .collect()
}

/// Script folders that must be uploaded because of `changes`.
#[must_use]
pub fn resolve_upload_targets<'a, I>(changes: I, workspace: &Path) -> OrderedFolderSet
where
    I: IntoIterator<Item = &'a ModifiedFile>,
{
    upload_targets_for_folders(&resolve_affected_folders(changes, workspace), workspace)
}

/// Script folders that were removed entirely.
///
/// A deleted file can no longer be inspected, so only the extension is checked. The
/// parent folder must also be gone; deleting one file out of a script folder that still
/// exists is an update, not a removal.
#[must_use]
pub fn resolve_delete_targets<'a, I>(changes: I, workspace: &Path) -> OrderedFolderSet
where
    I: IntoIterator<Item = &'a ModifiedFile>,
{
    changes
        .into_iter()
        .filter(|change| change.is_deleted() && is_script_by_extension(&change.full_path))
        .filter_map(ModifiedFile::parent)
        .filter(|parent| matches!(parent.try_exists(), Ok(false)))
        .filter_map(|parent| AffectedFolder::new(parent, workspace))
        .collect()
}

/// Runs all three resolutions over one change set.
///
/// A folder reported for upload is never also reported for deletion.
#[must_use]
pub fn resolve_change_set<'a, I>(changes: I, workspace: &Path) -> ChangeSetResolution
where
    I: IntoIterator<Item = &'a ModifiedFile>,
{
    let changes: Vec<&ModifiedFile> = changes.into_iter().collect();

    let affected = resolve_affected_folders(changes.iter().copied(), workspace);
    let upload = upload_targets_for_folders(&affected, workspace);
    let mut delete = resolve_delete_targets(changes.iter().copied(), workspace);

    delete.retain(|folder| {
        let conflicting = upload.contains(folder.relative_path());
        if conflicting {
            debug!(
                "'{}' reappeared on disk, keeping it as upload only",
                folder.relative_path().display()
            );
        }
        !conflicting
    });

    debug!(
        "{} change(s): {} affected, {} upload, {} delete",
        changes.len(),
        affected.len(),
        upload.len(),
        delete.len()
    );

    ChangeSetResolution {
        affected,
        upload,
        delete,
    }
}
