use crate::shared::Result;

/// SnapshotSource port for fetching lockfile contents
///
/// This port abstracts git and the file system so the comparison
/// logic can be exercised without a real repository.
pub trait SnapshotSource {
    /// Reads `filename` as it was recorded at `revision`
    ///
    /// # Arguments
    /// * `revision` - Any tree-ish, like `master` or `HEAD~3`
    /// * `filename` - Lockfile path relative to the project directory
    ///
    /// # Errors
    /// Returns an error if the revision cannot be resolved or the file
    /// did not exist at that revision
    fn read_at_revision(&self, revision: &str, filename: &str) -> Result<Vec<u8>>;

    /// Reads the current on-disk contents of `filename`
    ///
    /// # Errors
    /// Returns an error if the file is missing or unreadable
    fn read_working_tree(&self, filename: &str) -> Result<Vec<u8>>;

    /// Reports whether `filename` differs from its last committed state
    ///
    /// # Errors
    /// Returns an error if the repository state cannot be inspected
    /// (for example, outside of a git working tree)
    fn has_local_modifications(&self, filename: &str) -> Result<bool>;
}
