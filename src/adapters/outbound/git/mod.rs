/// Git-backed snapshot access
mod git_snapshot_source;

pub use git_snapshot_source::GitSnapshotSource;
