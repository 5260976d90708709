use pcsync_operations::operations::SyncPlan;

use crate::error::Result;

pub(crate) trait PlanFormatter {
    fn format_plan(&self, plan: &SyncPlan) -> Result<String>;
}
