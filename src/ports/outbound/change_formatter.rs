use crate::version_diff::domain::ChangeSet;
use crate::version_diff::policies::LinkPolicy;

/// Rendered report: text for stdout plus warnings for the diagnostic stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub output: String,
    pub warnings: Vec<String>,
}

impl Report {
    pub fn new(output: String, warnings: Vec<String>) -> Self {
        Self { output, warnings }
    }

    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }
}

/// ChangeFormatter port for rendering a change set
///
/// Implementations are pure: the same change set and policy always
/// produce the same report.
pub trait ChangeFormatter {
    /// Renders `changes`, deriving comparison links through `links`
    fn format(&self, changes: &ChangeSet, links: &LinkPolicy) -> Report;
}
