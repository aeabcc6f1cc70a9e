use crate::shared::Result;
use crate::version_diff::domain::VersionMap;

/// LockfileParser port turning raw lockfile bytes into a version map
///
/// One implementation exists per supported schema; the comparison and
/// report code never sees the on-disk format.
pub trait LockfileParser {
    /// Fixed name of the lockfile this parser understands (e.g. `glide.lock`)
    fn lockfile_name(&self) -> &'static str;

    /// Parses raw lockfile content
    ///
    /// # Arguments
    /// * `content` - Raw bytes as read from git or the working tree
    ///
    /// # Errors
    /// Returns an error if the bytes are not valid for this schema
    fn parse(&self, content: &[u8]) -> Result<VersionMap>;
}

impl<T: LockfileParser + ?Sized> LockfileParser for Box<T> {
    fn lockfile_name(&self) -> &'static str {
        (**self).lockfile_name()
    }

    fn parse(&self, content: &[u8]) -> Result<VersionMap> {
        (**self).parse(content)
    }
}
