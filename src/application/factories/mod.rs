mod formatter_factory;
mod parser_factory;

pub use formatter_factory::FormatterFactory;
pub use parser_factory::ParserFactory;
