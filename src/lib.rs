//! dep-manifest - Dependency manifest generation tool
//!
//! This library turns resolved dependency graphs into dependency
//! submission manifests: one entry per distinct package coordinate with
//! its package URL, relationship (direct/indirect), scope
//! (development/runtime) and outgoing edges.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`manifest_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_manifest::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateManifestUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = ManifestRequest::new(PathBuf::from("graph.json"), None, None);
//! let response = use_case.execute(request)?;
//!
//! let formatter = GithubJsonFormatter::new();
//! println!("{}", formatter.format(&response.manifest)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod manifest_generation;
pub mod ports;
pub mod repository;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{GithubJsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{ManifestRequest, ManifestResponse};
    pub use crate::application::use_cases::GenerateManifestUseCase;
    pub use crate::manifest_generation::domain::{
        Coordinate, DependencyScope, Manifest, ManifestEntry, NodeId, NodeKind, Relationship,
        ResolvedGraph, ResolvedNode,
    };
    pub use crate::manifest_generation::services::ManifestBuilder;
    pub use crate::ports::outbound::{
        GraphDocument, GraphReader, ManifestFormatter, OutputPresenter, ProgressReporter,
        ResolvedClasspaths,
    };
    pub use crate::repository::RepositoryInfo;
    pub use crate::shared::Result;
}
