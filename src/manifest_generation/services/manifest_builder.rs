use crate::manifest_generation::domain::{
    DependencyScope, Manifest, NodeId, NodeKind, ResolvedGraph,
};
use crate::shared::Result;
use std::collections::HashSet;

/// ManifestBuilder service for turning resolved dependency graphs into
/// a dependency manifest.
///
/// This service contains pure business logic for the graph-to-manifest
/// transformation. It has no I/O dependencies and works only with domain
/// objects. The traversal is single-threaded and memoized by package URL,
/// so diamond dependencies and repeated visits are safe.
pub struct ManifestBuilder;

impl ManifestBuilder {
    /// Builds a manifest from two resolved root sets over one graph arena.
    ///
    /// The compile-scope roots are walked first with scope `development`,
    /// then the runtime-scope roots with scope `runtime`. Root coordinates
    /// are marked `direct`; everything reached transitively is `indirect`
    /// unless it is also a root. Scope is last-write-wins, so the runtime
    /// walk overwrites the scope label of any overlapping coordinate.
    ///
    /// # Arguments
    /// * `module_name` - Name of the build module the manifest describes
    /// * `source_location` - Path of the build file, relative to the repository root
    /// * `graph` - Arena holding every resolved node of both classpaths
    /// * `compile_roots` - Direct dependencies of the compile classpath
    /// * `runtime_roots` - Direct dependencies of the runtime classpath
    ///
    /// # Errors
    /// Fails on the first node whose coordinate cannot be formed (for
    /// example a missing version); no partial manifest is returned.
    pub fn build(
        module_name: &str,
        source_location: &str,
        graph: &ResolvedGraph,
        compile_roots: &[NodeId],
        runtime_roots: &[NodeId],
    ) -> Result<Manifest> {
        let mut manifest = Manifest::new(module_name, source_location);

        Self::walk_root_set(
            graph,
            compile_roots,
            DependencyScope::Development,
            &mut manifest,
        )?;
        Self::walk_root_set(graph, runtime_roots, DependencyScope::Runtime, &mut manifest)?;

        Ok(manifest)
    }

    /// Walks one root set with a fresh visited set.
    ///
    /// The visited set is scoped to the walk so that a later root-set
    /// walk re-traverses shared subtrees and applies its own scope label.
    fn walk_root_set(
        graph: &ResolvedGraph,
        roots: &[NodeId],
        scope: DependencyScope,
        manifest: &mut Manifest,
    ) -> Result<()> {
        let mut visited: HashSet<String> = HashSet::new();

        for &root in roots {
            let package_url = Self::visit(graph, root, scope, manifest, &mut visited)?;
            // A coordinate reached directly from a root is always direct,
            // even if a previous transitive visit marked it indirect.
            manifest.mark_direct(&package_url);
        }

        Ok(())
    }

    /// Visits one node, records its entry and expands its edges.
    ///
    /// Returns the node's package URL so the caller can link to it.
    /// Re-entering a coordinate already seen in this walk only updates
    /// its scope; expansion happens at most once per walk, which keeps
    /// the recursion cycle-safe and the edge lists free of duplicates.
    fn visit(
        graph: &ResolvedGraph,
        id: NodeId,
        scope: DependencyScope,
        manifest: &mut Manifest,
        visited: &mut HashSet<String>,
    ) -> Result<String> {
        let node = graph
            .node(id)
            .ok_or_else(|| anyhow::anyhow!("Resolved graph references unknown node id {}", id))?;

        let package_url = node.coordinate()?.package_url();

        manifest.record_visit(&package_url, scope);

        if !visited.insert(package_url.clone()) {
            return Ok(package_url);
        }

        // Platform constraints and unrecognized node categories are
        // recorded as leaves; their reported edges are not expanded.
        if node.kind() == NodeKind::Library {
            let mut edges: Vec<String> = Vec::new();
            for &dependency in node.dependencies() {
                let edge = Self::visit(graph, dependency, scope, manifest, visited)?;
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
            manifest.set_dependencies(&package_url, edges);
        }

        Ok(package_url)
    }
}
