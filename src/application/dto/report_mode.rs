/// Report rendering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// One comparison link per changed dependency (default)
    #[default]
    Links,
    /// Added / Changed / Removed sections
    Summary,
}

impl ReportMode {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            ReportMode::Summary
        } else {
            ReportMode::Links
        }
    }
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportMode::Links => write!(f, "links"),
            ReportMode::Summary => write!(f, "summary"),
        }
    }
}
