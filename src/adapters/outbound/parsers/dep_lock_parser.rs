use super::{collect_records, decode_utf8};
use crate::ports::outbound::LockfileParser;
use crate::shared::error::DiffError;
use crate::shared::Result;
use crate::version_diff::domain::VersionMap;
use serde::Deserialize;

const DEP_LOCKFILE: &str = "Gopkg.lock";

#[derive(Debug, Deserialize)]
struct DepLock {
    #[serde(default)]
    projects: Vec<DepProject>,
}

#[derive(Debug, Deserialize)]
struct DepProject {
    name: String,
    revision: String,
}

/// DepLockParser adapter for dep's TOML lockfile
///
/// Reads the `[[projects]]` tables keyed by `name` and pinned by `revision`.
pub struct DepLockParser;

impl DepLockParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DepLockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileParser for DepLockParser {
    fn lockfile_name(&self) -> &'static str {
        DEP_LOCKFILE
    }

    fn parse(&self, content: &[u8]) -> Result<VersionMap> {
        let text = decode_utf8(content, DEP_LOCKFILE)?;
        let lockfile: DepLock = toml::from_str(text).map_err(|e| DiffError::LockfileParseError {
            source_label: DEP_LOCKFILE.to_string(),
            details: e.to_string(),
        })?;

        collect_records(
            lockfile
                .projects
                .into_iter()
                .map(|project| (project.name, project.revision)),
            DEP_LOCKFILE,
        )
    }
}
