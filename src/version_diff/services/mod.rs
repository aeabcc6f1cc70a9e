mod revision_selector;
mod version_comparator;

pub use revision_selector::{RevisionSelector, CLEAN_BASE_REVISION, DIRTY_BASE_REVISION};
pub use version_comparator::VersionComparator;
