use crate::application::dto::UsesResponse;
use crate::shared::Result;

/// DependentsFormatter port for turning a query result into text
///
/// Implementations exist for the flat column list and for the tree view.
pub trait DependentsFormatter {
    /// Formats the response
    ///
    /// # Returns
    /// The text to present; empty when there is nothing to print
    ///
    /// # Errors
    /// Returns an error if the response does not carry the data this
    /// formatter renders
    fn format(&self, response: &UsesResponse) -> Result<String>;
}
