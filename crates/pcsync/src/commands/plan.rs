use std::io::Write;
use std::path::Path;

use clap::Args;
use pcsync_operations::config::UploadScriptMode;
use pcsync_operations::operations::{PlanInput, PlanOperation};
use pcsync_operations::providers::{FileSystemConfigProvider, Git2Provider};
use tracing::info;

use crate::error::Result;
use crate::output::{JsonFormatter, PlainTextFormatter, PlanFormatter};

#[derive(Args)]
pub(crate) struct PlanArgs {
    /// Revision to diff against; without it every script is planned for upload
    #[arg(long)]
    base: Option<String>,

    /// Revision to diff up to (default: HEAD)
    #[arg(long)]
    head: Option<String>,

    /// Override the upload mode from the config file
    #[arg(long, value_enum)]
    mode: Option<UploadScriptMode>,

    /// Treat .xml files as test definitions
    #[arg(long)]
    consider_xml: bool,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    fn to_input(&self) -> PlanInput {
        PlanInput {
            base: self.base.clone(),
            head: self.head.clone(),
            mode: self.mode,
            consider_xml_as_tests: self.consider_xml.then_some(true),
        }
    }
}

pub(crate) fn run(workspace: &Path, args: &PlanArgs) -> Result<()> {
    let operation = PlanOperation::new(Git2Provider::new(), FileSystemConfigProvider::new());
    let plan = operation.execute(workspace, &args.to_input())?;

    info!(
        "planned {} upload(s), {} delete(s), {} test(s)",
        plan.upload.len(),
        plan.delete.len(),
        plan.tests.len()
    );

    let formatter: Box<dyn PlanFormatter> = if args.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainTextFormatter)
    };

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", formatter.format_plan(&plan)?)?;

    Ok(())
}
