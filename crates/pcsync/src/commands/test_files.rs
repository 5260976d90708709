use std::io::Write;
use std::path::Path;

use clap::Args;
use pcsync_operations::providers::FileSystemConfigProvider;
use pcsync_operations::traits::ConfigProvider;
use pcsync_workspace::scan_all_tests;

use crate::error::Result;
use crate::output::PlainTextFormatter;

#[derive(Args)]
pub(crate) struct TestsArgs {
    /// Treat .xml files as test definitions
    #[arg(long)]
    consider_xml: bool,
}

pub(crate) fn run(workspace: &Path, args: &TestsArgs) -> Result<()> {
    let config = FileSystemConfigProvider::new().load_config(workspace)?;
    let consider_xml = args.consider_xml || config.consider_xml_as_tests();

    let tests = scan_all_tests(workspace, consider_xml)?;

    let mut stdout = std::io::stdout().lock();
    write!(
        stdout,
        "{}",
        PlainTextFormatter::format_paths(tests.relative_paths())
    )?;

    Ok(())
}
