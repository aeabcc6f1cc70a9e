use lockfile_diff::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock SnapshotSource serving lockfile contents from memory
#[derive(Default, Clone)]
pub struct MockSnapshotSource {
    history: HashMap<String, String>,
    working_tree: Option<String>,
    dirty: Option<bool>,
    pub reads: Arc<Mutex<Vec<String>>>,
}

impl MockSnapshotSource {
    pub fn new() -> Self {
        Self {
            dirty: Some(false),
            ..Self::default()
        }
    }

    pub fn with_revision(mut self, revision: &str, content: &str) -> Self {
        self.history
            .insert(revision.to_string(), content.to_string());
        self
    }

    pub fn with_working_tree(mut self, content: &str) -> Self {
        self.working_tree = Some(content.to_string());
        self
    }

    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = Some(dirty);
        self
    }

    /// Simulates running outside of a git working tree
    pub fn without_repository(mut self) -> Self {
        self.dirty = None;
        self
    }

    pub fn get_reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn read_at_revision(&self, revision: &str, filename: &str) -> Result<Vec<u8>> {
        self.reads.lock().unwrap().push(revision.to_string());
        match self.history.get(revision) {
            Some(content) => Ok(content.clone().into_bytes()),
            None => Err(DiffError::SnapshotUnavailable {
                revision: revision.to_string(),
                path: filename.into(),
                details: format!("fatal: invalid object name '{}'", revision),
            }
            .into()),
        }
    }

    fn read_working_tree(&self, filename: &str) -> Result<Vec<u8>> {
        self.reads.lock().unwrap().push("WORKTREE".to_string());
        match &self.working_tree {
            Some(content) => Ok(content.clone().into_bytes()),
            None => Err(DiffError::LockfileNotFound {
                path: filename.into(),
                suggestion: "mock has no working tree".to_string(),
            }
            .into()),
        }
    }

    fn has_local_modifications(&self, filename: &str) -> Result<bool> {
        self.dirty.ok_or_else(|| {
            DiffError::RepositoryStateError {
                path: filename.into(),
                details: "fatal: not a git repository".to_string(),
            }
            .into()
        })
    }
}
