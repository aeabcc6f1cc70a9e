/// DiffRequest - Request DTO for the summarize-diff use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffRequest {
    /// Zero, one or two tree-ish values supplied by the user
    pub revisions: Vec<String>,
}

impl DiffRequest {
    pub fn new(revisions: Vec<String>) -> Self {
        Self { revisions }
    }
}
