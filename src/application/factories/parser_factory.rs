use crate::adapters::outbound::parsers::{DepLockParser, GlideLockParser};
use crate::application::dto::LockfileFormat;
use crate::ports::outbound::LockfileParser;

/// Factory for creating lockfile parsers
///
/// Picks the single parser implementation for a format, so the rest of
/// the pipeline stays format-agnostic.
pub struct ParserFactory;

impl ParserFactory {
    /// Creates a parser for the specified lockfile format
    ///
    /// # Examples
    /// ```
    /// use lockfile_diff::application::dto::LockfileFormat;
    /// use lockfile_diff::application::factories::ParserFactory;
    ///
    /// let parser = ParserFactory::create(LockfileFormat::Dep);
    /// assert_eq!(parser.lockfile_name(), "Gopkg.lock");
    /// ```
    pub fn create(format: LockfileFormat) -> Box<dyn LockfileParser> {
        match format {
            LockfileFormat::Glide => Box::new(GlideLockParser::new()),
            LockfileFormat::Dep => Box::new(DepLockParser::new()),
        }
    }
}
