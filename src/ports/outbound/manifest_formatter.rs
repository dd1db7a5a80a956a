use crate::manifest_generation::domain::Manifest;
use crate::shared::Result;

/// ManifestFormatter port for rendering a manifest document
///
/// This port abstracts the output representation (submission JSON,
/// human-readable markdown, ...) of a built manifest.
pub trait ManifestFormatter {
    /// Renders the manifest into its textual representation
    ///
    /// # Arguments
    /// * `manifest` - The manifest document to render
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, manifest: &Manifest) -> Result<String>;
}
