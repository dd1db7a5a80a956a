use crate::ports::outbound::{GraphDocument, GraphReader};
use crate::shared::error::ManifestError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the GraphReader port, providing file system
/// access for reading resolved-graph documents.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReader for FileSystemReader {
    fn read_graph(&self, graph_path: &Path) -> Result<GraphDocument> {
        if !graph_path.exists() {
            return Err(ManifestError::GraphFileNotFound {
                path: graph_path.to_path_buf(),
                suggestion: format!(
                    "The resolved-graph file \"{}\" does not exist.\n   \
                     Export the resolved dependency graph from your build first, or pass the correct path.",
                    graph_path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(graph_path).map_err(|e| {
            ManifestError::FileReadError {
                path: graph_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ManifestError::GraphParseError {
                path: graph_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_graph_success() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("graph.json");
        fs::write(
            &graph_path,
            r#"{
                "module": ":app",
                "nodes": {
                    "org.example:lib-a:1.0": {
                        "namespace": "org.example",
                        "name": "lib-a",
                        "version": "1.0"
                    }
                },
                "compile": ["org.example:lib-a:1.0"]
            }"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let document = reader.read_graph(&graph_path).unwrap();

        assert_eq!(document.module.as_deref(), Some(":app"));
        assert_eq!(document.nodes.len(), 1);
        assert_eq!(document.compile.len(), 1);
    }

    #[test]
    fn test_read_graph_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("missing.json");

        let reader = FileSystemReader::new();
        let result = reader.read_graph(&graph_path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Dependency graph file not found"));
    }

    #[test]
    fn test_read_graph_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("graph.json");
        fs::write(&graph_path, "not json {{{").unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_graph(&graph_path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse dependency graph file"));
    }

    #[test]
    fn test_read_graph_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_graph(temp_dir.path());

        assert!(result.is_err());
    }
}
