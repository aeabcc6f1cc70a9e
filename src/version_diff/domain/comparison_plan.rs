use std::fmt;

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A tree-ish resolved through git history
    Revision(String),
    /// The lockfile as it currently sits on disk
    WorkingTree,
}

impl Endpoint {
    pub fn revision(revision: impl Into<String>) -> Self {
        Endpoint::Revision(revision.into())
    }

    pub fn is_working_tree(&self) -> bool {
        matches!(self, Endpoint::WorkingTree)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Revision(revision) => write!(f, "{}", revision),
            Endpoint::WorkingTree => write!(f, "working tree"),
        }
    }
}

/// The pair of snapshots picked for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPlan {
    from: Endpoint,
    to: Endpoint,
}

impl ComparisonPlan {
    pub fn new(from: Endpoint, to: Endpoint) -> Self {
        Self { from, to }
    }

    pub fn from_endpoint(&self) -> &Endpoint {
        &self.from
    }

    pub fn to_endpoint(&self) -> &Endpoint {
        &self.to
    }

    /// Diagnostic line naming both points, e.g. `Changes in glide.lock since HEAD~`.
    pub fn describe(&self, lockfile_name: &str) -> String {
        match &self.to {
            Endpoint::WorkingTree => {
                format!("Changes in {} since {}", lockfile_name, self.from)
            }
            Endpoint::Revision(to) => format!(
                "Changes in {} between {} and {}",
                lockfile_name, self.from, to
            ),
        }
    }
}
