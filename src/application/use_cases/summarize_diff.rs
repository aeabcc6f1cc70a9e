use crate::application::dto::{DiffRequest, DiffResponse};
use crate::ports::outbound::{LockfileParser, ProgressReporter, SnapshotSource};
use crate::shared::Result;
use crate::version_diff::domain::{Endpoint, VersionMap};
use crate::version_diff::services::{RevisionSelector, VersionComparator};
use anyhow::Context;

/// SummarizeDiffUseCase - Core use case comparing two lockfile snapshots
///
/// Orchestrates revision selection, snapshot fetching, parsing and
/// comparison using generic dependency injection for every adapter.
///
/// # Type Parameters
/// * `S` - SnapshotSource implementation
/// * `LP` - LockfileParser implementation
/// * `PR` - ProgressReporter implementation
pub struct SummarizeDiffUseCase<S, LP, PR> {
    snapshot_source: S,
    parser: LP,
    progress_reporter: PR,
}

impl<S, LP, PR> SummarizeDiffUseCase<S, LP, PR>
where
    S: SnapshotSource,
    LP: LockfileParser,
    PR: ProgressReporter,
{
    /// Creates a new SummarizeDiffUseCase with injected dependencies
    pub fn new(snapshot_source: S, parser: LP, progress_reporter: PR) -> Self {
        Self {
            snapshot_source,
            parser,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// # Arguments
    /// * `request` - Revisions supplied by the user
    ///
    /// # Returns
    /// DiffResponse holding the chosen endpoints and the classified changes
    ///
    /// # Errors
    /// Fails on the first selection, fetch or parse error; nothing is
    /// rendered in that case.
    pub fn execute(&self, request: DiffRequest) -> Result<DiffResponse> {
        let lockfile_name = self.parser.lockfile_name();

        // Step 1: Pick endpoints
        let plan = RevisionSelector::select(&request.revisions, || {
            self.snapshot_source.has_local_modifications(lockfile_name)
        })?;

        self.progress_reporter
            .report(&format!("📖 {}", plan.describe(lockfile_name)));

        // Step 2: Load both snapshots
        let before = self.load_versions(plan.from_endpoint(), lockfile_name)?;
        let after = self.load_versions(plan.to_endpoint(), lockfile_name)?;

        // Step 3: Compare
        let change_set = VersionComparator::compare(&before, &after);

        self.progress_reporter.report(&format!(
            "✅ {} added, {} changed, {} removed",
            change_set.added_count(),
            change_set.update_count(),
            change_set.removed_count()
        ));

        Ok(DiffResponse::new(plan, change_set))
    }

    fn load_versions(&self, endpoint: &Endpoint, lockfile_name: &str) -> Result<VersionMap> {
        let content = match endpoint {
            Endpoint::Revision(revision) => self
                .snapshot_source
                .read_at_revision(revision, lockfile_name)?,
            Endpoint::WorkingTree => self.snapshot_source.read_working_tree(lockfile_name)?,
        };

        self.parser
            .parse(&content)
            .with_context(|| format!("Invalid {} in {}", lockfile_name, endpoint))
    }
}
