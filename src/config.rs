//! Configuration file support for depviz.
//!
//! Provides YAML-based configuration through `depviz.config.yml` files,
//! and merges file values with command-line overrides into validated
//! [`Settings`].

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::registry::RegistryLocator;
use crate::adapters::outbound::renderer::DEFAULT_RENDERER;
use crate::application::dto::{GraphRequest, OutputFormat};
use crate::dependency_graph::domain::{PackageId, PackageName};
use crate::dependency_graph::services::TraversalPolicy;
use crate::shared::error::DepvizError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depviz.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub package_version: Option<String>,
    pub max_depth: Option<i64>,
    pub exclude_substring: Option<String>,
    pub format: Option<String>,
    pub renderer: Option<String>,
    pub image: Option<PathBuf>,
    pub reverse_depth: Option<i64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub package_version: Option<String>,
    pub max_depth: Option<i64>,
    pub exclude_substring: Option<String>,
    pub format: Option<OutputFormat>,
    pub renderer: Option<String>,
    pub image: Option<PathBuf>,
    pub reverse: bool,
    pub reverse_depth: Option<i64>,
}

/// Effective, validated settings of one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub package: PackageId,
    /// Locator text as the user wrote it
    pub repository_url: String,
    pub repository: RegistryLocator,
    pub policy: TraversalPolicy,
    pub format: OutputFormat,
    pub renderer: String,
    pub image: Option<PathBuf>,
    pub reverse: bool,
    pub reverse_depth: Option<usize>,
}

impl Settings {
    /// Builds the resolution request these settings describe
    pub fn to_request(&self) -> GraphRequest {
        let request = GraphRequest::new(
            self.package.clone(),
            self.repository_url.clone(),
            self.policy.clone(),
        );
        if self.reverse {
            request.with_reverse(self.reverse_depth)
        } else {
            request
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(DepvizError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content =
        read_regular_file(path, "config file").map_err(|e| DepvizError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    // An empty document deserializes to unit, not to a mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| DepvizError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merges file values with command-line overrides and validates the result.
pub fn resolve_settings(config: ConfigFile, overrides: Overrides) -> Result<Settings> {
    let package_name = overrides
        .package_name
        .or(config.package_name)
        .ok_or_else(|| {
            invalid(
                "package_name",
                "is required (set it in the config file or pass --package)",
            )
        })?;
    let package_version = overrides.package_version.or(config.package_version);
    let package = resolve_package(&package_name, package_version)?;

    let repository_url = overrides
        .repository_url
        .or(config.repository_url)
        .ok_or_else(|| {
            invalid(
                "repository_url",
                "is required (set it in the config file or pass --repository)",
            )
        })?;
    let repository: RegistryLocator = repository_url
        .parse()
        .map_err(|reason: String| invalid("repository_url", &reason))?;

    let max_depth = positive("max_depth", overrides.max_depth.or(config.max_depth))?;
    let exclude_substring = overrides.exclude_substring.or(config.exclude_substring);
    let policy = TraversalPolicy::new(max_depth, exclude_substring)
        .map_err(|e| invalid("exclude_substring", &e.to_string()))?;

    let format = match overrides.format {
        Some(format) => format,
        None => match config.format {
            Some(text) => text
                .parse()
                .map_err(|reason: String| invalid("format", &reason))?,
            None => OutputFormat::default(),
        },
    };

    let renderer = overrides
        .renderer
        .or(config.renderer)
        .unwrap_or_else(|| DEFAULT_RENDERER.to_string());
    if renderer.trim().is_empty() {
        return Err(invalid("renderer", "must not be empty").into());
    }

    let reverse_depth = positive(
        "reverse_depth",
        overrides.reverse_depth.or(config.reverse_depth),
    )?;

    Ok(Settings {
        package,
        repository_url: repository_url.trim().to_string(),
        repository,
        policy,
        format,
        renderer,
        image: overrides.image.or(config.image),
        reverse: overrides.reverse || reverse_depth.is_some(),
        reverse_depth,
    })
}

/// Accepts `name` or `name@version`; an explicit version wins over the suffix.
fn resolve_package(spec: &str, version: Option<String>) -> Result<PackageId> {
    let parsed = PackageId::parse(spec);
    let name = PackageName::new(parsed.name().to_string())
        .map_err(|e| invalid("package_name", &e.to_string()))?;
    let version = version
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| parsed.version().map(str::to_string));
    Ok(PackageId::with_version(name.as_str(), version))
}

fn positive(field: &str, value: Option<i64>) -> Result<Option<usize>> {
    match value {
        None => Ok(None),
        Some(v) if v > 0 => usize::try_from(v)
            .map(Some)
            .map_err(|e| invalid(field, &e.to_string()).into()),
        Some(v) => Err(invalid(field, &format!("must be a positive integer, got {}", v)).into()),
    }
}

fn invalid(field: &str, reason: &str) -> DepvizError {
    DepvizError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
