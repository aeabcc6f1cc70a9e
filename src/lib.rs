//! lockfile-diff - summarize dependency changes between two lockfile snapshots
//!
//! Compares `glide.lock` (YAML) or `Gopkg.lock` (TOML) across git history and
//! reports added, removed and re-pinned dependencies, following hexagonal
//! architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`version_diff`): version maps, change sets, the comparator,
//!   the revision selector and the comparison-link policy
//! - **Application Layer** (`application`): the summarize-diff use case, DTOs and factories
//! - **Ports** (`ports`): interfaces for git access, parsing, formatting and output
//! - **Adapters** (`adapters`): git CLI, YAML/TOML parsers, report formatters, console
//! - **Shared** (`shared`): error types and file-safety helpers
//!
//! # Example
//!
//! ```no_run
//! use lockfile_diff::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = SummarizeDiffUseCase::new(
//!     GitSnapshotSource::new(PathBuf::from(".")),
//!     GlideLockParser::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(DiffRequest::new(vec!["v1.0".to_string()]))?;
//!
//! let report = SummaryFormatter::new().format(&response.change_set, &LinkPolicy::default());
//! print!("{}", report.output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod version_diff;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{LinksFormatter, SummaryFormatter};
    pub use crate::adapters::outbound::git::GitSnapshotSource;
    pub use crate::adapters::outbound::parsers::{DepLockParser, GlideLockParser};
    pub use crate::application::dto::{DiffRequest, DiffResponse, LockfileFormat, ReportMode};
    pub use crate::application::factories::{FormatterFactory, ParserFactory};
    pub use crate::application::use_cases::SummarizeDiffUseCase;
    pub use crate::ports::outbound::{
        ChangeFormatter, LockfileParser, OutputPresenter, ProgressReporter, Report,
        SnapshotSource,
    };
    pub use crate::shared::error::{DiffError, ExitCode};
    pub use crate::shared::Result;
    pub use crate::version_diff::domain::{
        ChangeSet, ComparisonPlan, Endpoint, Update, VersionMap,
    };
    pub use crate::version_diff::policies::{LinkPolicy, PrefixRewrite};
    pub use crate::version_diff::services::{RevisionSelector, VersionComparator};
}
