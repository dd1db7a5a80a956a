use crate::manifest_generation::domain::Manifest;

/// Response DTO for manifest generation
#[derive(Debug, Clone)]
pub struct ManifestResponse {
    pub manifest: Manifest,
}

impl ManifestResponse {
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }
}
