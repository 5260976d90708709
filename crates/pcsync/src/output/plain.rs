use std::fmt::Write;
use std::path::Path;

use pcsync_core::to_slash_path;
use pcsync_operations::operations::SyncPlan;

use super::PlanFormatter;
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    /// One slash-separated path per line.
    pub(crate) fn format_paths<'a>(paths: impl Iterator<Item = &'a Path>) -> String {
        let mut output = String::new();
        for path in paths {
            let _ = writeln!(output, "{}", to_slash_path(path));
        }
        output
    }

    fn format_section<'a>(
        output: &mut String,
        title: &str,
        paths: impl Iterator<Item = &'a Path>,
    ) {
        let _ = writeln!(output, "{title}:");
        let mut empty = true;
        for path in paths {
            empty = false;
            let _ = writeln!(output, "  {}", to_slash_path(path));
        }
        if empty {
            output.push_str("  (none)\n");
        }
    }
}

impl PlanFormatter for PlainTextFormatter {
    fn format_plan(&self, plan: &SyncPlan) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "Mode: {}", plan.mode);
        output.push('\n');
        Self::format_section(&mut output, "Upload", plan.upload.relative_paths());
        output.push('\n');
        Self::format_section(&mut output, "Delete", plan.delete.relative_paths());
        output.push('\n');
        Self::format_section(&mut output, "Tests", plan.tests.relative_paths());
        Ok(output)
    }
}
