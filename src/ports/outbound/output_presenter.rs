use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted manifest content is presented.
pub trait OutputPresenter {
    /// Presents the formatted manifest content to the output destination
    ///
    /// # Arguments
    /// * `content` - The formatted manifest content to present
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
