/// ProgressReporter port for diagnostic messages
///
/// Everything reported here goes to the diagnostic stream, never into
/// the report itself.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);
}
