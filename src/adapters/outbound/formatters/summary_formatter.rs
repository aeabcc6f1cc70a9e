use crate::ports::outbound::{ChangeFormatter, Report};
use crate::version_diff::domain::{ChangeSet, Update};
use crate::version_diff::policies::LinkPolicy;

/// SummaryFormatter adapter for the verbose report
///
/// Prints `Added:`, `Changed:` and `Removed:` sections, skipping empty
/// ones. Never produces warnings.
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_names(output: &mut String, title: &str, names: &[String]) {
        if names.is_empty() {
            return;
        }
        output.push_str(title);
        output.push_str(":\n");
        for name in names {
            output.push_str(&format!(" - {}\n", name));
        }
    }

    fn render_updates(output: &mut String, updates: &[Update], links: &LinkPolicy) {
        if updates.is_empty() {
            return;
        }
        output.push_str("Changed:\n");
        for update in updates {
            output.push_str(&format!(
                " - {}: {} -> {}\n",
                update.name(),
                update.short_from(),
                update.short_to()
            ));
            if let Some(link) = links.compare_link(update) {
                output.push_str(&format!("   - {}\n", link));
            }
        }
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeFormatter for SummaryFormatter {
    fn format(&self, changes: &ChangeSet, links: &LinkPolicy) -> Report {
        let mut output = String::new();
        Self::render_names(&mut output, "Added", changes.added());
        Self::render_updates(&mut output, changes.updates(), links);
        Self::render_names(&mut output, "Removed", changes.removed());
        Report::new(output, Vec::new())
    }
}
