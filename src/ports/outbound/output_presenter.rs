use crate::shared::Result;

/// OutputPresenter port for presenting the formatted query result
pub trait OutputPresenter {
    /// Presents the formatted dependents list or tree
    ///
    /// Empty content presents nothing at all.
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
