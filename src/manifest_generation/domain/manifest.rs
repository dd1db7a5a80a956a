use serde::Serialize;
use std::collections::BTreeMap;

/// How a package entered the dependency graph.
///
/// `Direct` always dominates `Indirect`: once a coordinate is known to be
/// a root dependency, later transitive visits never downgrade it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Direct,
    Indirect,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Direct => "direct",
            Relationship::Indirect => "indirect",
        }
    }
}

/// Resolution scope a package was reached through.
///
/// Scope is last-write-wins per visit: a coordinate on both classpaths
/// ends up with the scope of the walk that visited it last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Development,
    Runtime,
}

impl DependencyScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyScope::Development => "development",
            DependencyScope::Runtime => "runtime",
        }
    }
}

/// Reference to the build file this manifest was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestFile {
    pub source_location: String,
}

/// A single manifest entry, keyed by its coordinate's package URL.
///
/// `dependencies` holds the package URLs of the entry's outgoing edges.
/// It stays empty for platform-style nodes, which are recorded but never
/// expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub package_url: String,
    pub relationship: Relationship,
    pub scope: DependencyScope,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl ManifestEntry {
    pub fn new(package_url: impl Into<String>, scope: DependencyScope) -> Self {
        Self {
            package_url: package_url.into(),
            relationship: Relationship::Indirect,
            scope,
            dependencies: Vec::new(),
        }
    }
}

/// Dependency manifest document for one build module.
///
/// Created fresh per generation run, fully populated in one pass, then
/// serialized and discarded. Entries are kept in a BTreeMap so the
/// serialized document is deterministically ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    name: String,
    file: ManifestFile,
    resolved: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn new(name: impl Into<String>, source_location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: ManifestFile {
                source_location: source_location.into(),
            },
            resolved: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> &ManifestFile {
        &self.file
    }

    pub fn resolved(&self) -> &BTreeMap<String, ManifestEntry> {
        &self.resolved
    }

    pub fn entry(&self, package_url: &str) -> Option<&ManifestEntry> {
        self.resolved.get(package_url)
    }

    pub fn contains(&self, package_url: &str) -> bool {
        self.resolved.contains_key(package_url)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Records a visit to a coordinate.
    ///
    /// A new coordinate is inserted as `indirect` with the walk's scope;
    /// an existing entry keeps its relationship and only has its scope
    /// overwritten (last-write-wins).
    pub fn record_visit(&mut self, package_url: &str, scope: DependencyScope) {
        self.resolved
            .entry(package_url.to_string())
            .and_modify(|entry| entry.scope = scope)
            .or_insert_with(|| ManifestEntry::new(package_url, scope));
    }

    /// Marks a coordinate as a direct dependency. Direct dominates
    /// indirect, so this is never undone by later visits.
    pub fn mark_direct(&mut self, package_url: &str) {
        if let Some(entry) = self.resolved.get_mut(package_url) {
            entry.relationship = Relationship::Direct;
        }
    }

    /// Replaces the outgoing-edge list of an entry.
    ///
    /// Replacement (rather than appending) keeps re-expansion during a
    /// second root-set walk from duplicating edges.
    pub fn set_dependencies(&mut self, package_url: &str, dependencies: Vec<String>) {
        if let Some(entry) = self.resolved.get_mut(package_url) {
            entry.dependencies = dependencies;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_new() {
        let manifest = Manifest::new(":app", "app/build.gradle");
        assert_eq!(manifest.name(), ":app");
        assert_eq!(manifest.file().source_location, "app/build.gradle");
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_record_visit_inserts_indirect() {
        let mut manifest = Manifest::new(":app", "build.gradle");
        manifest.record_visit("pkg:maven/org.example/lib-a@1.0", DependencyScope::Development);

        let entry = manifest.entry("pkg:maven/org.example/lib-a@1.0").unwrap();
        assert_eq!(entry.relationship, Relationship::Indirect);
        assert_eq!(entry.scope, DependencyScope::Development);
        assert!(entry.dependencies.is_empty());
    }

    #[test]
    fn test_record_visit_overwrites_scope_only() {
        let mut manifest = Manifest::new(":app", "build.gradle");
        manifest.record_visit("pkg:maven/org.example/lib-a@1.0", DependencyScope::Development);
        manifest.mark_direct("pkg:maven/org.example/lib-a@1.0");
        manifest.record_visit("pkg:maven/org.example/lib-a@1.0", DependencyScope::Runtime);

        let entry = manifest.entry("pkg:maven/org.example/lib-a@1.0").unwrap();
        assert_eq!(entry.relationship, Relationship::Direct);
        assert_eq!(entry.scope, DependencyScope::Runtime);
    }

    #[test]
    fn test_mark_direct_unknown_coordinate_is_noop() {
        let mut manifest = Manifest::new(":app", "build.gradle");
        manifest.mark_direct("pkg:maven/org.example/ghost@1.0");
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_set_dependencies_replaces() {
        let mut manifest = Manifest::new(":app", "build.gradle");
        manifest.record_visit("pkg:maven/org.example/lib-a@1.0", DependencyScope::Development);
        manifest.set_dependencies(
            "pkg:maven/org.example/lib-a@1.0",
            vec!["pkg:maven/org.example/lib-c@2.0".to_string()],
        );
        manifest.set_dependencies(
            "pkg:maven/org.example/lib-a@1.0",
            vec!["pkg:maven/org.example/lib-c@2.0".to_string()],
        );

        let entry = manifest.entry("pkg:maven/org.example/lib-a@1.0").unwrap();
        assert_eq!(entry.dependencies.len(), 1);
    }

    #[test]
    fn test_relationship_and_scope_labels() {
        assert_eq!(Relationship::Direct.as_str(), "direct");
        assert_eq!(Relationship::Indirect.as_str(), "indirect");
        assert_eq!(DependencyScope::Development.as_str(), "development");
        assert_eq!(DependencyScope::Runtime.as_str(), "runtime");
    }

    #[test]
    fn test_manifest_serializes_expected_shape() {
        let mut manifest = Manifest::new(":app", "app/build.gradle");
        manifest.record_visit("pkg:maven/org.example/lib-a@1.0", DependencyScope::Development);
        manifest.mark_direct("pkg:maven/org.example/lib-a@1.0");

        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["name"], ":app");
        assert_eq!(json["file"]["source_location"], "app/build.gradle");
        let entry = &json["resolved"]["pkg:maven/org.example/lib-a@1.0"];
        assert_eq!(entry["package_url"], "pkg:maven/org.example/lib-a@1.0");
        assert_eq!(entry["relationship"], "direct");
        assert_eq!(entry["scope"], "development");
        // Empty dependency lists are omitted
        assert!(entry.get("dependencies").is_none());
    }
}
