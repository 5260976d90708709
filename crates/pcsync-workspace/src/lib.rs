mod ancestor;
mod classify;
mod error;
mod resolve;
mod scan;
pub mod signatures;
mod test_files;

pub use ancestor::{find_owning_script_folder, is_under_script_folder, nearest_script_folder};
pub use classify::{contains_script, is_script, is_script_by_extension, is_test};
pub use error::WorkspaceError;
pub use resolve::{
    ChangeSetResolution, resolve_affected_folders, resolve_change_set, resolve_delete_targets,
    resolve_upload_targets, upload_targets_for_folders,
};
pub use scan::{scan_all_scripts, scan_all_tests};
pub use test_files::{resolve_affected_files, resolve_tests_to_update};

pub type Result<T> = std::result::Result<T, WorkspaceError>;
