/// Lockfile parser adapters, one per supported schema
mod dep_lock_parser;
mod glide_lock_parser;

pub use dep_lock_parser::DepLockParser;
pub use glide_lock_parser::GlideLockParser;

use crate::shared::error::DiffError;
use crate::shared::Result;
use crate::version_diff::domain::VersionMap;

/// Decodes lockfile bytes as UTF-8 text
fn decode_utf8<'a>(content: &'a [u8], lockfile_name: &str) -> Result<&'a str> {
    std::str::from_utf8(content).map_err(|e| {
        DiffError::LockfileParseError {
            source_label: lockfile_name.to_string(),
            details: format!("content is not valid UTF-8: {}", e),
        }
        .into()
    })
}

/// Builds a version map from `(name, revision)` records, rejecting empty names
fn collect_records<I>(records: I, lockfile_name: &str) -> Result<VersionMap>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut pairs = Vec::new();
    for (index, (name, revision)) in records.into_iter().enumerate() {
        if name.trim().is_empty() {
            return Err(DiffError::LockfileParseError {
                source_label: lockfile_name.to_string(),
                details: format!("record #{} has an empty name", index + 1),
            }
            .into());
        }
        pairs.push((name, revision));
    }
    Ok(pairs.into_iter().collect())
}
