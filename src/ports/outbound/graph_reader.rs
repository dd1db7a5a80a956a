use crate::manifest_generation::domain::{NodeId, NodeKind, ResolvedGraph, ResolvedNode};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// GraphReader port for reading resolved dependency graph documents
///
/// This port abstracts the file system operations needed to read the
/// resolved-graph JSON document exported by the build system's resolver.
pub trait GraphReader {
    /// Reads and parses the resolved graph document at the given path
    ///
    /// # Arguments
    /// * `graph_path` - Path to the resolved-graph JSON file
    ///
    /// # Returns
    /// The parsed graph document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid resolved-graph document
    fn read_graph(&self, graph_path: &Path) -> Result<GraphDocument>;
}

/// One node of the resolved graph document.
///
/// `version` is optional on purpose: constraint-only nodes can arrive
/// without a selected version, and coordinate formation decides later
/// whether that is fatal. `kind` is a structured label (`library`,
/// `platform`, anything else is treated as an opaque leaf category).
#[derive(Debug, Clone, Deserialize)]
pub struct GraphNode {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn default_kind() -> String {
    "library".to_string()
}

/// Resolved dependency graph document as exported by the build system.
///
/// `nodes` is keyed by an arbitrary node id (conventionally the
/// `group:name:version` notation); `compile` and `runtime` list the ids
/// of the direct dependencies of each classpath.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub source_location: Option<String>,
    pub nodes: BTreeMap<String, GraphNode>,
    #[serde(default)]
    pub compile: Vec<String>,
    #[serde(default)]
    pub runtime: Vec<String>,
}

/// Domain-side view of a graph document: one node arena shared by the
/// two classpath root sets.
#[derive(Debug, Clone)]
pub struct ResolvedClasspaths {
    pub graph: ResolvedGraph,
    pub compile_roots: Vec<NodeId>,
    pub runtime_roots: Vec<NodeId>,
}

impl GraphDocument {
    /// Converts the document into an index-based graph arena plus the
    /// two root-id sets.
    ///
    /// # Errors
    /// Fails if a root or dependency references a node id that is not
    /// present in the `nodes` table.
    pub fn into_classpaths(self) -> Result<ResolvedClasspaths> {
        let mut graph = ResolvedGraph::new();
        let mut ids: BTreeMap<String, NodeId> = BTreeMap::new();

        // First pass: allocate arena slots in document order so the
        // resulting ids are deterministic.
        for (key, node) in &self.nodes {
            let id = graph.add_node(ResolvedNode::new(
                node.namespace.clone(),
                node.name.clone(),
                node.version.clone(),
                NodeKind::from_label(&node.kind),
            ));
            ids.insert(key.clone(), id);
        }

        // Second pass: wire up edges.
        for (key, node) in &self.nodes {
            let from = ids[key];
            for dependency in &node.dependencies {
                let to = Self::lookup(&ids, dependency, key)?;
                graph.add_edge(from, to);
            }
        }

        let compile_roots = Self::lookup_roots(&ids, &self.compile, "compile")?;
        let runtime_roots = Self::lookup_roots(&ids, &self.runtime, "runtime")?;

        Ok(ResolvedClasspaths {
            graph,
            compile_roots,
            runtime_roots,
        })
    }

    fn lookup(ids: &BTreeMap<String, NodeId>, key: &str, referenced_from: &str) -> Result<NodeId> {
        ids.get(key).copied().ok_or_else(|| {
            anyhow::anyhow!(
                "Node \"{}\" references unknown node \"{}\"",
                referenced_from,
                key
            )
        })
    }

    fn lookup_roots(
        ids: &BTreeMap<String, NodeId>,
        roots: &[String],
        classpath: &str,
    ) -> Result<Vec<NodeId>> {
        roots
            .iter()
            .map(|key| {
                ids.get(key).copied().ok_or_else(|| {
                    anyhow::anyhow!(
                        "The {} root set references unknown node \"{}\"",
                        classpath,
                        key
                    )
                })
            })
            .collect()
    }
}
