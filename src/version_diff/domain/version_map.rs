use std::collections::HashMap;

/// Number of leading revision characters shown in reports and links
pub const SHORT_REVISION_LEN: usize = 8;

/// Returns the first [`SHORT_REVISION_LEN`] characters of a revision.
///
/// Revisions shorter than that (tags like `v1.2`) are returned whole.
pub fn short_revision(revision: &str) -> &str {
    match revision.char_indices().nth(SHORT_REVISION_LEN) {
        Some((idx, _)) => &revision[..idx],
        None => revision,
    }
}

/// VersionMap value object mapping dependency name to pinned revision
///
/// Iteration order carries no meaning. When the same name is inserted
/// twice while building, the later revision wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMap {
    entries: HashMap<String, String>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, revision)| (name.as_str(), revision.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<N, R> FromIterator<(N, R)> for VersionMap
where
    N: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, revision)| (name.into(), revision.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for VersionMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}
