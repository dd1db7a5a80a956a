use dep_manifest::ports::outbound::{GraphDocument, GraphReader};
use dep_manifest::shared::Result;
use std::path::Path;

/// Mock GraphReader that returns a fixed document or a simulated failure
pub struct MockGraphReader {
    json: Option<String>,
}

impl MockGraphReader {
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
        }
    }

    pub fn with_failure() -> Self {
        Self { json: None }
    }
}

impl GraphReader for MockGraphReader {
    fn read_graph(&self, _graph_path: &Path) -> Result<GraphDocument> {
        match &self.json {
            Some(json) => serde_json::from_str(json).map_err(Into::into),
            None => anyhow::bail!("Mock failure: could not read graph document"),
        }
    }
}
