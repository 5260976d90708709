use std::io::Write;
use std::path::Path;

use pcsync_workspace::scan_all_scripts;

use crate::error::Result;
use crate::output::PlainTextFormatter;

pub(crate) fn run(workspace: &Path) -> Result<()> {
    let folders = scan_all_scripts(workspace)?;

    let mut stdout = std::io::stdout().lock();
    write!(
        stdout,
        "{}",
        PlainTextFormatter::format_paths(folders.relative_paths())
    )?;

    Ok(())
}
