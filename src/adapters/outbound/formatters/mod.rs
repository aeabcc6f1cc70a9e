/// Formatter adapters for the two report modes
mod links_formatter;
mod summary_formatter;

pub use links_formatter::LinksFormatter;
pub use summary_formatter::SummaryFormatter;
