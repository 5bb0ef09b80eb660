use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the encoded content is presented.
pub trait OutputPresenter {
    /// Presents the encoded content to the output destination
    ///
    /// # Arguments
    /// * `content` - The Base64 text to present
    ///
    /// # Returns
    /// Success or error if presentation fails
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
