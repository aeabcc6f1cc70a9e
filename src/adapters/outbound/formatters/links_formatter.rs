use crate::ports::outbound::{ChangeFormatter, Report};
use crate::version_diff::domain::ChangeSet;
use crate::version_diff::policies::LinkPolicy;

/// LinksFormatter adapter for the default, link-only report
///
/// Emits one comparison URL per update. Updates without a derivable URL
/// become warnings instead of output lines. Additions and removals are
/// not reported in this mode.
pub struct LinksFormatter;

impl LinksFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinksFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeFormatter for LinksFormatter {
    fn format(&self, changes: &ChangeSet, links: &LinkPolicy) -> Report {
        let mut output = String::new();
        let mut warnings = Vec::new();

        for update in changes.updates() {
            match links.compare_link(update) {
                Some(link) => {
                    output.push_str(&link);
                    output.push('\n');
                }
                None => warnings.push(format!(
                    "cannot get link for {} ({} -> {})",
                    update.name(),
                    update.short_from(),
                    update.short_to()
                )),
            }
        }

        Report::new(output, warnings)
    }
}
