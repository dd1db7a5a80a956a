use crate::application::dto::{ManifestRequest, ManifestResponse};
use crate::manifest_generation::services::ManifestBuilder;
use crate::ports::outbound::{GraphReader, ProgressReporter};
use crate::shared::error::ManifestError;
use crate::shared::Result;

/// Source location recorded when neither the graph document nor the
/// caller supplies one
const DEFAULT_SOURCE_LOCATION: &str = "build.gradle";

/// GenerateManifestUseCase - Core use case for manifest generation
///
/// Orchestrates the manifest generation workflow: read the resolved
/// graph document, convert it into the domain graph, run the builder
/// over both classpaths and return the manifest.
///
/// # Type Parameters
/// * `GR` - GraphReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateManifestUseCase<GR, PR> {
    graph_reader: GR,
    progress_reporter: PR,
}

impl<GR, PR> GenerateManifestUseCase<GR, PR>
where
    GR: GraphReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateManifestUseCase with injected dependencies
    pub fn new(graph_reader: GR, progress_reporter: PR) -> Self {
        Self {
            graph_reader,
            progress_reporter,
        }
    }

    /// Executes the manifest generation use case
    ///
    /// # Arguments
    /// * `request` - Manifest request containing the graph path and overrides
    ///
    /// # Returns
    /// ManifestResponse containing the built manifest
    pub fn execute(&self, request: ManifestRequest) -> Result<ManifestResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading resolved dependency graph from: {}",
            request.graph_path.display()
        ));

        let document = self.graph_reader.read_graph(&request.graph_path)?;

        let module_name = request
            .module_name
            .clone()
            .or_else(|| document.module.clone())
            .ok_or_else(|| ManifestError::Validation {
                message: "No module name available. Pass --name or add a \"module\" field to the graph document.".to_string(),
            })?;

        let source_location = request
            .source_location
            .clone()
            .or_else(|| document.source_location.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE_LOCATION.to_string());

        let classpaths = document.into_classpaths()?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} resolved node(s) ({} compile root(s), {} runtime root(s))",
            classpaths.graph.len(),
            classpaths.compile_roots.len(),
            classpaths.runtime_roots.len()
        ));

        let manifest = ManifestBuilder::build(
            &module_name,
            &source_location,
            &classpaths.graph,
            &classpaths.compile_roots,
            &classpaths.runtime_roots,
        )?;

        self.progress_reporter.report_completion(&format!(
            "✅ Manifest built for {}: {} package(s)",
            manifest.name(),
            manifest.len()
        ));

        Ok(ManifestResponse::new(manifest))
    }
}
