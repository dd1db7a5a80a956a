pub mod manifest_builder;

pub use manifest_builder::ManifestBuilder;
