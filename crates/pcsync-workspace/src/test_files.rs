use std::path::Path;

use pcsync_core::{AffectedFile, ModifiedFile, OrderedFileSet};

use crate::classify::{is_nested_under_workspace, is_test};

/// Every changed file below the workspace, excluding direct children of the root.
#[must_use]
pub fn resolve_affected_files<'a, I>(changes: I, workspace: &Path) -> OrderedFileSet
where
    I: IntoIterator<Item = &'a ModifiedFile>,
{
    changes
        .into_iter()
        .map(|change| change.full_path.as_path())
        .filter(|path| is_nested_under_workspace(path, workspace))
        .filter_map(|path| AffectedFile::new(path, workspace))
        .collect()
}

/// Narrows affected files to the tests that currently exist and must be imported.
#[must_use]
pub fn resolve_tests_to_update(
    affected_files: &OrderedFileSet,
    workspace: &Path,
    consider_xml_as_test: bool,
) -> OrderedFileSet {
    affected_files
        .iter()
        .filter(|file| is_test(file.full_path(), workspace, consider_xml_as_test))
        .cloned()
        .collect()
}
