use std::path::PathBuf;

/// Request DTO for manifest generation
///
/// Carries the invocation context from the CLI into the use case.
/// `module_name` and `source_location` override the corresponding
/// fields of the graph document when present.
#[derive(Debug, Clone)]
pub struct ManifestRequest {
    pub graph_path: PathBuf,
    pub module_name: Option<String>,
    pub source_location: Option<String>,
}

impl ManifestRequest {
    pub fn new(
        graph_path: PathBuf,
        module_name: Option<String>,
        source_location: Option<String>,
    ) -> Self {
        Self {
            graph_path,
            module_name,
            source_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new() {
        let request = ManifestRequest::new(
            PathBuf::from("graph.json"),
            Some(":app".to_string()),
            None,
        );
        assert_eq!(request.graph_path, PathBuf::from("graph.json"));
        assert_eq!(request.module_name.as_deref(), Some(":app"));
        assert!(request.source_location.is_none());
    }
}
