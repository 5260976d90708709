mod plan;

pub use plan::{PlanInput, PlanOperation, SyncPlan};
