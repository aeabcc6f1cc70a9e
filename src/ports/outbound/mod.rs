/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (git, lockfile formats, console).
pub mod change_formatter;
pub mod lockfile_parser;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_source;

pub use change_formatter::{ChangeFormatter, Report};
pub use lockfile_parser::LockfileParser;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_source::SnapshotSource;
