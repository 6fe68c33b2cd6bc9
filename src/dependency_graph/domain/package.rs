use crate::shared::Result;
use std::fmt;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Separator between a package name and its version in lookup keys and records
pub const VERSION_SEPARATOR: char = '@';

/// NewType wrapper for a user-supplied root package name with validation
///
/// Names read from registry data are not validated; only the traversal root
/// coming from configuration goes through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed."
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A package name optionally pinned to a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId {
    name: String,
    version: Option<String>,
}

impl PackageId {
    /// Creates an unpinned identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Creates an identifier pinned to `version`; an empty version is the same as none
    pub fn with_version(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version: version.filter(|v| !v.is_empty()),
        }
    }

    /// Parses `name[@version]`, trimming whitespace around both parts
    pub fn parse(spec: &str) -> Self {
        match spec.split_once(VERSION_SEPARATOR) {
            Some((name, version)) => {
                Self::with_version(name.trim(), Some(version.trim().to_string()))
            }
            None => Self::new(spec.trim()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Memoization key: `name`, or `name@version` when pinned
    pub fn cache_key(&self) -> String {
        match &self.version {
            Some(version) => format!("{}{}{}", self.name, VERSION_SEPARATOR, version),
            None => self.name.clone(),
        }
    }

    /// Lookup equality: names must be equal; an unpinned query matches any
    /// record version, a pinned one only the identical version.
    pub fn matches(&self, name: &str, version: Option<&str>) -> bool {
        if self.name != name {
            return false;
        }
        match self.version.as_deref() {
            None => true,
            Some(wanted) => version == Some(wanted),
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cache_key())
    }
}

/// One declaration from the backing data: a package and its direct dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub name: String,
    pub version: Option<String>,
    /// Dependency names with any version suffix removed, in declared order
    pub dependencies: Vec<String>,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, version: Option<String>, dependencies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            version: version.filter(|v| !v.is_empty()),
            dependencies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("serde_json".to_string()).unwrap();
        assert_eq!(name.as_str(), "serde_json");
    }

    #[test]
    fn test_package_name_new_empty() {
        assert!(PackageName::new("".to_string()).is_err());
        assert!(PackageName::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_package_name_rejects_quotes() {
        let result = PackageName::new("evil\"name".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        let result = PackageName::new("a".repeat(MAX_PACKAGE_NAME_LENGTH + 1));
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_package_id_parse_with_version() {
        let id = PackageId::parse(" serde @ 1.0 ");
        assert_eq!(id.name(), "serde");
        assert_eq!(id.version(), Some("1.0"));
        assert_eq!(id.cache_key(), "serde@1.0");
    }

    #[test]
    fn test_package_id_parse_without_version() {
        let id = PackageId::parse("tokio");
        assert_eq!(id.name(), "tokio");
        assert_eq!(id.version(), None);
        assert_eq!(id.cache_key(), "tokio");
    }

    #[test]
    fn test_empty_version_is_unpinned() {
        let id = PackageId::with_version("serde", Some(String::new()));
        assert_eq!(id.version(), None);
        assert_eq!(id.to_string(), "serde");
    }

    #[test]
    fn test_unpinned_query_matches_any_version() {
        let id = PackageId::new("serde");
        assert!(id.matches("serde", Some("1.0")));
        assert!(id.matches("serde", None));
        assert!(!id.matches("serde_json", None));
    }

    #[test]
    fn test_pinned_query_requires_equal_version() {
        let id = PackageId::with_version("serde", Some("1.0".to_string()));
        assert!(id.matches("serde", Some("1.0")));
        assert!(!id.matches("serde", Some("2.0")));
        assert!(!id.matches("serde", None));
    }
}
