use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("operation failed")]
    Operation(#[from] pcsync_operations::OperationError),

    #[error("workspace error")]
    Workspace(#[from] pcsync_workspace::WorkspaceError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("workspace path '{path}' is not accessible")]
    WorkspacePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
