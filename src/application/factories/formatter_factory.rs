use crate::adapters::outbound::formatters::{LinksFormatter, SummaryFormatter};
use crate::application::dto::ReportMode;
use crate::ports::outbound::ChangeFormatter;

/// Factory for creating change-set formatters
///
/// This factory encapsulates the creation logic for the report modes,
/// following the Factory Pattern.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report mode
    ///
    /// # Examples
    /// ```
    /// use lockfile_diff::application::dto::ReportMode;
    /// use lockfile_diff::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportMode::Summary);
    /// ```
    pub fn create(mode: ReportMode) -> Box<dyn ChangeFormatter> {
        match mode {
            ReportMode::Links => Box::new(LinksFormatter::new()),
            ReportMode::Summary => Box::new(SummaryFormatter::new()),
        }
    }
}
