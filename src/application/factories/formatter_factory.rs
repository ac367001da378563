use crate::adapters::outbound::formatters::{ColumnsFormatter, TreeFormatter};
use crate::application::dto::OutputMode;
use crate::ports::outbound::DependentsFormatter;

/// Factory for creating dependents formatters
///
/// This factory picks the formatter adapter for an output mode. It belongs
/// in the application layer as it selects infrastructure adapters based on
/// application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output mode
    ///
    /// # Arguments
    /// * `mode` - Flat list or tree
    /// * `terminal_width` - Width of stdout when it is a terminal; `None`
    ///   prints one name per line
    ///
    /// # Examples
    /// ```
    /// use pkg_uses::application::dto::OutputMode;
    /// use pkg_uses::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputMode::Tree, None);
    /// ```
    pub fn create(mode: OutputMode, terminal_width: Option<usize>) -> Box<dyn DependentsFormatter> {
        match mode {
            OutputMode::Flat => Box::new(ColumnsFormatter::new(terminal_width)),
            OutputMode::Tree => Box::new(TreeFormatter::new()),
        }
    }
}
