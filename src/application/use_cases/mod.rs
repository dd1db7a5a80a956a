pub mod generate_manifest;

pub use generate_manifest::GenerateManifestUseCase;
