use super::version_map::short_revision;

/// A dependency present in both snapshots whose pinned revision moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    name: String,
    from: String,
    to: String,
}

impl Update {
    /// Returns `None` when the revisions are equal; that is not an update.
    pub fn new(name: String, from: String, to: String) -> Option<Self> {
        if from == to {
            return None;
        }
        Some(Self { name, from, to })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from_revision(&self) -> &str {
        &self.from
    }

    pub fn to_revision(&self) -> &str {
        &self.to
    }

    pub fn short_from(&self) -> &str {
        short_revision(&self.from)
    }

    pub fn short_to(&self) -> &str {
        short_revision(&self.to)
    }
}

/// ChangeSet aggregate: the classified difference between two version maps
///
/// All three collections are sorted by name and pairwise disjoint. Only
/// [`VersionComparator`](crate::version_diff::services::VersionComparator)
/// builds non-empty change sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    added: Vec<String>,
    removed: Vec<String>,
    updates: Vec<Update>,
}

impl ChangeSet {
    pub(crate) fn from_sorted(
        added: Vec<String>,
        removed: Vec<String>,
        updates: Vec<Update>,
    ) -> Self {
        Self {
            added,
            removed,
            updates,
        }
    }

    pub fn added(&self) -> &[String] {
        &self.added
    }

    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updates.is_empty()
    }

    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn update_count(&self) -> usize {
        self.updates.len()
    }
}
