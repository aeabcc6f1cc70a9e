/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the adapters,
/// keeping the domain layer isolated.
mod diff_request;
mod diff_response;
mod lockfile_format;
mod report_mode;

pub use diff_request::DiffRequest;
pub use diff_response::DiffResponse;
pub use lockfile_format::LockfileFormat;
pub use report_mode::ReportMode;
