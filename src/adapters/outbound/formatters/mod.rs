/// Formatter adapters for the flat and tree output modes
mod columns_formatter;
mod tree_formatter;

pub use columns_formatter::ColumnsFormatter;
pub use tree_formatter::TreeFormatter;
