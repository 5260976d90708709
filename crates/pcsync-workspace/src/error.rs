use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("cannot read workspace root '{path}'")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk workspace at '{path}'")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
