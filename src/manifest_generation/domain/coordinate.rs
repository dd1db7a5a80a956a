use crate::shared::error::ManifestError;
use crate::shared::Result;

/// Maximum length for a single coordinate component (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

/// Package-URL type for coordinates resolved from a Maven-style repository
const PURL_TYPE: &str = "maven";

/// Coordinate value object identifying a resolved package.
///
/// A coordinate is the (namespace, name, version) triple of a resolved
/// dependency. Its canonical string form is a package URL
/// (`pkg:maven/<namespace>/<name>@<version>`). Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    namespace: String,
    name: String,
    version: String,
}

impl Coordinate {
    /// Creates a coordinate from its three components.
    ///
    /// # Errors
    /// Returns `ManifestError::CoordinateFormation` if any component is
    /// empty or exceeds the length limit. A manifest with malformed
    /// entries is worse than a failed build step, so this is a hard error.
    pub fn new(namespace: String, name: String, version: String) -> Result<Self> {
        let module = format!("{}:{}", namespace, name);

        Self::validate_component("namespace", &namespace, &module)?;
        Self::validate_component("name", &name, &module)?;
        if version.is_empty() {
            return Err(ManifestError::CoordinateFormation {
                module,
                details: "no version was resolved".to_string(),
            }
            .into());
        }
        Self::validate_component("version", &version, &module)?;

        Ok(Self {
            namespace,
            name,
            version,
        })
    }

    fn validate_component(field: &str, value: &str, module: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ManifestError::CoordinateFormation {
                module: module.to_string(),
                details: format!("{} is empty", field),
            }
            .into());
        }

        // Length limit to keep manifests bounded even for hostile inputs
        if value.len() > MAX_COMPONENT_LENGTH {
            return Err(ManifestError::CoordinateFormation {
                module: module.to_string(),
                details: format!(
                    "{} is too long ({} bytes). Maximum allowed: {} bytes",
                    field,
                    value.len(),
                    MAX_COMPONENT_LENGTH
                ),
            }
            .into());
        }

        Ok(())
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the canonical package-URL form of this coordinate.
    ///
    /// Components are percent-encoded as required by the purl specification.
    pub fn package_url(&self) -> String {
        format!(
            "pkg:{}/{}/{}@{}",
            PURL_TYPE,
            urlencoding::encode(&self.namespace),
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.version)
        )
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.package_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_new_valid() {
        let coordinate = Coordinate::new(
            "org.example".to_string(),
            "lib-a".to_string(),
            "1.0".to_string(),
        )
        .unwrap();
        assert_eq!(coordinate.namespace(), "org.example");
        assert_eq!(coordinate.name(), "lib-a");
        assert_eq!(coordinate.version(), "1.0");
    }

    #[test]
    fn test_coordinate_package_url() {
        let coordinate = Coordinate::new(
            "org.example".to_string(),
            "lib-a".to_string(),
            "1.0".to_string(),
        )
        .unwrap();
        assert_eq!(coordinate.package_url(), "pkg:maven/org.example/lib-a@1.0");
    }

    #[test]
    fn test_coordinate_package_url_encodes_components() {
        let coordinate = Coordinate::new(
            "org.example".to_string(),
            "lib-a".to_string(),
            "1.0+build 7".to_string(),
        )
        .unwrap();
        assert_eq!(
            coordinate.package_url(),
            "pkg:maven/org.example/lib-a@1.0%2Bbuild%207"
        );
    }

    #[test]
    fn test_coordinate_new_empty_namespace() {
        let result = Coordinate::new("".to_string(), "lib-a".to_string(), "1.0".to_string());
        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("namespace is empty"));
    }

    #[test]
    fn test_coordinate_new_empty_name() {
        let result = Coordinate::new("org.example".to_string(), "".to_string(), "1.0".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_coordinate_new_missing_version() {
        let result = Coordinate::new(
            "org.example".to_string(),
            "lib-a".to_string(),
            "".to_string(),
        );
        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("no version was resolved"));
        assert!(err_string.contains("org.example:lib-a"));
    }

    #[test]
    fn test_coordinate_new_component_too_long() {
        let result = Coordinate::new(
            "org.example".to_string(),
            "a".repeat(300),
            "1.0".to_string(),
        );
        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("too long"));
    }

    #[test]
    fn test_coordinate_display_matches_package_url() {
        let coordinate = Coordinate::new(
            "com.acme".to_string(),
            "widget".to_string(),
            "2.3.4".to_string(),
        )
        .unwrap();
        assert_eq!(format!("{}", coordinate), coordinate.package_url());
    }

    #[test]
    fn test_coordinate_equality() {
        let a = Coordinate::new(
            "org.example".to_string(),
            "lib-a".to_string(),
            "1.0".to_string(),
        )
        .unwrap();
        let b = Coordinate::new(
            "org.example".to_string(),
            "lib-a".to_string(),
            "1.0".to_string(),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
