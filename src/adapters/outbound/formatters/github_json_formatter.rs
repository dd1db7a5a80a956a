use crate::manifest_generation::domain::Manifest;
use crate::ports::outbound::ManifestFormatter;
use crate::shared::Result;

/// GithubJsonFormatter adapter for the dependency-submission JSON format
///
/// This adapter implements the ManifestFormatter port, rendering the
/// manifest as the pretty-printed document consumed by the dependency
/// graph ingestion endpoint: `name`, `file.source_location` and a
/// `resolved` mapping keyed by package URL.
pub struct GithubJsonFormatter;

impl GithubJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GithubJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for GithubJsonFormatter {
    fn format(&self, manifest: &Manifest) -> Result<String> {
        serde_json::to_string_pretty(manifest).map_err(Into::into)
    }
}
