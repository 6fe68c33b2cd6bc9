use crate::dependency_graph::domain::package::VERSION_SEPARATOR;
use crate::dependency_graph::domain::{DependencyRecord, PackageId};
use crate::ports::outbound::RegistryReader;
use crate::shared::error::DepvizError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::PathBuf;

const ARROW: &str = "->";
const LIST_SEPARATOR: char = ',';

/// TextFileRegistry adapter reading `name[@version] -> dep[@version], ...` lines
///
/// The file is read on every call; memoization is the caller's concern.
#[derive(Debug, Clone)]
pub struct TextFileRegistry {
    path: PathBuf,
}

impl TextFileRegistry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(DepvizError::FileReadError {
                path: self.path.clone(),
                details: "Registry file not found".to_string(),
            }
            .into());
        }

        read_regular_file(&self.path, "registry file").map_err(|e| {
            DepvizError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Parses one registry line.
///
/// Returns `None` for blank lines, lines without `->`, and malformed
/// headers (empty name, more than one `@`).
pub fn parse_record(line: &str) -> Option<DependencyRecord> {
    let line = line.trim();
    if line.is_empty() || !line.contains(ARROW) {
        return None;
    }

    let mut parts = line.split(ARROW);
    let header = parts.next()?.trim();
    let list = parts.next()?;

    let (name, version) = match header.split_once(VERSION_SEPARATOR) {
        Some((_, version)) if version.contains(VERSION_SEPARATOR) => return None,
        Some((name, version)) => (name.trim(), Some(version.trim().to_string())),
        None => (header, None),
    };
    if name.is_empty() {
        return None;
    }

    let dependencies = list
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|dep| !dep.is_empty())
        .map(|dep| PackageId::parse(dep).name().to_string())
        .filter(|dep| !dep.is_empty())
        .collect();

    Some(DependencyRecord::new(name, version, dependencies))
}

impl RegistryReader for TextFileRegistry {
    fn read_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        let content = self.read()?;
        Ok(content
            .lines()
            .filter_map(parse_record)
            .find(|record| package.matches(&record.name, record.version.as_deref()))
            .map(|record| record.dependencies)
            .unwrap_or_default())
    }

    fn scan_records(&self) -> Result<Vec<DependencyRecord>> {
        let content = self.read()?;
        Ok(content.lines().filter_map(parse_record).collect())
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
