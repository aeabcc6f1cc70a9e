pub mod change_set;
pub mod comparison_plan;
pub mod version_map;

pub use change_set::{ChangeSet, Update};
pub use comparison_plan::{ComparisonPlan, Endpoint};
pub use version_map::{short_revision, VersionMap, SHORT_REVISION_LEN};
