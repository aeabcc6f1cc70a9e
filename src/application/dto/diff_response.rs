use crate::version_diff::domain::{ChangeSet, ComparisonPlan};

/// DiffResponse - Response DTO from the summarize-diff use case
#[derive(Debug, Clone)]
pub struct DiffResponse {
    /// The endpoints that were compared
    pub plan: ComparisonPlan,
    /// Classified dependency changes, ready for a formatter
    pub change_set: ChangeSet,
}

impl DiffResponse {
    pub fn new(plan: ComparisonPlan, change_set: ChangeSet) -> Self {
        Self { plan, change_set }
    }
}
