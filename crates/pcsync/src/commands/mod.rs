mod plan;
mod scan;
mod test_files;

use std::path::Path;

use clap::Subcommand;

use crate::error::Result;

pub(crate) use plan::PlanArgs;
pub(crate) use test_files::TestsArgs;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List every script folder in the workspace
    Scan,
    /// List every test definition in the workspace
    Tests(TestsArgs),
    /// Compute the sync plan for the workspace
    Plan(PlanArgs),
}

impl Commands {
    pub(crate) fn execute(self, workspace: &Path) -> Result<()> {
        match self {
            Self::Scan => scan::run(workspace),
            Self::Tests(args) => test_files::run(workspace, &args),
            Self::Plan(args) => plan::run(workspace, &args),
        }
    }
}
