use crate::ports::outbound::SnapshotSource;
use crate::shared::error::DiffError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_LOCKFILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// GitSnapshotSource adapter reading lockfiles through the `git` CLI
///
/// Every git command runs inside `project_dir`, and lockfile names are
/// resolved relative to it both on disk and in history.
pub struct GitSnapshotSource {
    project_dir: PathBuf,
    max_size: u64,
}

impl GitSnapshotSource {
    pub fn new(project_dir: PathBuf) -> Self {
        Self {
            project_dir,
            max_size: MAX_LOCKFILE_SIZE,
        }
    }

    /// Overrides the largest lockfile accepted from disk or history
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.project_dir)
            .output()
    }
}

impl SnapshotSource for GitSnapshotSource {
    fn read_at_revision(&self, revision: &str, filename: &str) -> Result<Vec<u8>> {
        let object = format!("{}:./{}", revision, filename);
        let unavailable = |details: String| DiffError::SnapshotUnavailable {
            revision: revision.to_string(),
            path: PathBuf::from(filename),
            details,
        };

        // The blob size is checked before its content is loaded.
        let size_output = self
            .git(&["cat-file", "-s", "--end-of-options", &object])
            .map_err(|e| unavailable(format!("Failed to run git: {}", e)))?;

        if !size_output.status.success() {
            let stderr = String::from_utf8_lossy(&size_output.stderr);
            return Err(unavailable(stderr.trim().to_string()).into());
        }

        let size: u64 = String::from_utf8_lossy(&size_output.stdout)
            .trim()
            .parse()
            .map_err(|e| unavailable(format!("Unexpected object size from git: {}", e)))?;

        let label = format!("{} at {}", filename, revision);
        validate_file_size(size, &label, self.max_size)?;

        let output = self
            .git(&["show", "--end-of-options", &object])
            .map_err(|e| unavailable(format!("Failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(unavailable(stderr.trim().to_string()).into());
        }

        Ok(output.stdout)
    }

    fn read_working_tree(&self, filename: &str) -> Result<Vec<u8>> {
        let lockfile_path = self.project_dir.join(filename);

        if !lockfile_path.exists() {
            return Err(DiffError::LockfileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "{} does not exist in \"{}\".\n   \
                     Run from the directory holding the lockfile, or pass two revisions to compare history only.",
                    filename,
                    self.project_dir.display()
                ),
            }
            .into());
        }

        let size = validate_regular_file(&lockfile_path, filename)?;
        validate_file_size(size, &lockfile_path.display().to_string(), self.max_size)?;

        fs::read(&lockfile_path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", lockfile_path.display(), e))
    }

    fn has_local_modifications(&self, filename: &str) -> Result<bool> {
        let state_error = |details: String| DiffError::RepositoryStateError {
            path: PathBuf::from(filename),
            details,
        };

        let output = self
            .git(&["diff", "--quiet", "--", filename])
            .map_err(|e| state_error(format!("Failed to run git: {}", e)))?;

        // `git diff --quiet` exits 1 when there are differences.
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(state_error(stderr.trim().to_string()).into())
            }
        }
    }
}
