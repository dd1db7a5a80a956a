pub mod coordinate;
pub mod manifest;
pub mod resolved_graph;

pub use coordinate::Coordinate;
pub use manifest::{DependencyScope, Manifest, ManifestEntry, ManifestFile, Relationship};
pub use resolved_graph::{NodeId, NodeKind, ResolvedGraph, ResolvedNode};
