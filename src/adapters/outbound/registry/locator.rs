use super::{StaticRegistry, TextFileRegistry};
use crate::ports::outbound::RegistryReader;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const FILE_SCHEME: &str = "file://";
const BUILTIN_SCHEME: &str = "builtin:";

/// Where dependency data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLocator {
    /// The built-in demo table
    Builtin,
    /// A text file in `name[@version] -> dep, dep` format
    File(PathBuf),
}

impl FromStr for RegistryLocator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Repository locator cannot be empty".to_string());
        }
        if s == "builtin" || s.starts_with(BUILTIN_SCHEME) {
            return Ok(RegistryLocator::Builtin);
        }
        if let Some(path) = s.strip_prefix(FILE_SCHEME) {
            if path.is_empty() {
                return Err("file:// locator is missing a path".to_string());
            }
            return Ok(RegistryLocator::File(PathBuf::from(path)));
        }
        if let Some((scheme, _)) = s.split_once("://") {
            return Err(format!(
                "Unsupported repository scheme '{}://'. Network registries are not supported; use file://PATH or builtin:",
                scheme
            ));
        }
        Ok(RegistryLocator::File(PathBuf::from(s)))
    }
}

impl fmt::Display for RegistryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryLocator::Builtin => write!(f, "{}demo", BUILTIN_SCHEME),
            RegistryLocator::File(path) => write!(f, "{}{}", FILE_SCHEME, path.display()),
        }
    }
}

/// Creates the registry reader for a locator.
///
/// Nothing is read here; a missing file only surfaces on the first lookup.
pub fn open_registry(locator: &RegistryLocator) -> Box<dyn RegistryReader> {
    match locator {
        RegistryLocator::Builtin => Box::new(StaticRegistry::demo()),
        RegistryLocator::File(path) => Box::new(TextFileRegistry::new(path.clone())),
    }
}
