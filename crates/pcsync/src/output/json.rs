use pcsync_operations::operations::SyncPlan;

use super::PlanFormatter;
use crate::error::Result;

pub(crate) struct JsonFormatter;

impl PlanFormatter for JsonFormatter {
    fn format_plan(&self, plan: &SyncPlan) -> Result<String> {
        let mut output = serde_json::to_string_pretty(plan)?;
        output.push('\n');
        Ok(output)
    }
}
