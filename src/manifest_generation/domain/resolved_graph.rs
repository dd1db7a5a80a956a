use super::Coordinate;
use crate::shared::Result;

/// Index of a node inside a [`ResolvedGraph`] arena
pub type NodeId = usize;

/// Category of a resolved dependency node, as reported by the
/// resolver's structured kind label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A regular resolved library artifact
    Library,
    /// A BOM-style platform constraint with no artifact contribution
    Platform,
    /// Anything else the resolver reports; treated as a graph leaf
    Other,
}

impl NodeKind {
    /// Maps a resolver-supplied kind label to a structured kind.
    ///
    /// Unrecognized labels become `Other` so that manifest generation
    /// stays robust to resolver edge cases.
    pub fn from_label(label: &str) -> Self {
        match label {
            "library" => NodeKind::Library,
            "platform" => NodeKind::Platform,
            _ => NodeKind::Other,
        }
    }
}

/// A single resolved dependency node: a module identity plus edges to
/// the nodes it resolved against.
///
/// The version is optional because resolvers can report constraint-only
/// nodes without a selected version; coordinate formation fails for
/// those rather than emitting a malformed manifest entry.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    namespace: String,
    name: String,
    version: Option<String>,
    kind: NodeKind,
    dependencies: Vec<NodeId>,
}

impl ResolvedNode {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: Option<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            version,
            kind,
            dependencies: Vec::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn dependencies(&self) -> &[NodeId] {
        &self.dependencies
    }

    /// Forms the package coordinate for this node.
    ///
    /// # Errors
    /// Fails when the node has no resolved version or empty identity
    /// fields, signalling a coordinate-formation failure to the caller.
    pub fn coordinate(&self) -> Result<Coordinate> {
        Coordinate::new(
            self.namespace.clone(),
            self.name.clone(),
            self.version.clone().unwrap_or_default(),
        )
    }
}

/// Arena-backed resolved dependency graph.
///
/// Nodes are owned by the arena and referenced by index, so diamond
/// dependencies converge on a single node and revisits are cheap.
/// The graph is fully built before traversal and never mutated during it.
#[derive(Debug, Clone, Default)]
pub struct ResolvedGraph {
    nodes: Vec<ResolvedNode>,
}

impl ResolvedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the arena and returns its id
    pub fn add_node(&mut self, node: ResolvedNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Adds a resolved-dependency edge from `from` to `to`
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.nodes.get_mut(from) {
            node.dependencies.push(to);
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&ResolvedNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
