use crate::manifest_generation::domain::Manifest;
use crate::ports::outbound::ManifestFormatter;
use crate::repository::RepositoryInfo;
use crate::shared::Result;
use std::fmt::Write;

/// MarkdownFormatter adapter for human-readable manifest reports
///
/// This adapter implements the ManifestFormatter port, rendering a
/// summary table suitable for CI logs and pull-request comments.
pub struct MarkdownFormatter {
    repository: Option<RepositoryInfo>,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self { repository: None }
    }

    /// Attaches repository metadata shown in the report header
    pub fn with_repository(mut self, repository: Option<RepositoryInfo>) -> Self {
        self.repository = repository;
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for MarkdownFormatter {
    fn format(&self, manifest: &Manifest) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Dependency manifest for `{}`", manifest.name())?;
        writeln!(output)?;
        writeln!(output, "Source: `{}`", manifest.file().source_location)?;

        if let Some(repository) = &self.repository {
            match repository.tag() {
                Some(tag) => writeln!(
                    output,
                    "Repository: `{}` (tag `{}`)",
                    repository.slug(),
                    tag
                )?,
                None => writeln!(output, "Repository: `{}`", repository.slug())?,
            }
        }

        writeln!(output)?;
        writeln!(output, "{} resolved package(s)", manifest.len())?;
        writeln!(output)?;
        writeln!(output, "| Package URL | Relationship | Scope | Dependencies |")?;
        writeln!(output, "|---|---|---|---|")?;

        for entry in manifest.resolved().values() {
            writeln!(
                output,
                "| `{}` | {} | {} | {} |",
                entry.package_url,
                entry.relationship.as_str(),
                entry.scope.as_str(),
                entry.dependencies.len()
            )?;
        }

        Ok(output)
    }
}
