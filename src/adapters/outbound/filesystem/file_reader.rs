use crate::dependents::domain::{Dependency, DependencyKind, Package};
use crate::ports::outbound::{PackageIndex, RegistryReader, DEFAULT_NAMESPACE};
use crate::shared::error::UsesError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// On-disk layout of a package index
#[derive(Debug, Deserialize)]
struct RawPackageIndex {
    default_namespace: Option<String>,
    #[serde(default, alias = "packages")]
    package: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
    namespace: Option<String>,
    #[serde(default)]
    installed: bool,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
}

/// A dependency is either a plain reference or a table with a kind
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDependency {
    Reference(String),
    Detailed { name: String, kind: Option<String> },
}

/// Serialization format of a package index, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexFormat {
    Toml,
    Json,
}

impl IndexFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => IndexFormat::Json,
            _ => IndexFormat::Toml,
        }
    }
}

/// FileSystemReader adapter for reading package indexes from disk
///
/// This adapter implements the RegistryReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryReader for FileSystemReader {
    fn read_package_index(&self, index_path: &Path) -> Result<PackageIndex> {
        if !index_path.exists() {
            return Err(UsesError::RegistryNotFound {
                path: index_path.to_path_buf(),
                suggestion: format!(
                    "Package index \"{}\" does not exist.\n   \
                     Specify the index with --registry or set `registry` in the config file.",
                    index_path.display()
                ),
            }
            .into());
        }

        let content = read_checked_file(index_path, "package index")?;

        parse_package_index(&content, IndexFormat::from_path(index_path)).map_err(|e| {
            UsesError::RegistryParseError {
                path: index_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

fn parse_package_index(content: &str, format: IndexFormat) -> Result<PackageIndex> {
    let raw: RawPackageIndex = match format {
        IndexFormat::Toml => toml::from_str(content)?,
        IndexFormat::Json => serde_json::from_str(content)?,
    };

    let default_namespace = raw
        .default_namespace
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

    let packages = raw
        .package
        .into_iter()
        .map(into_package)
        .collect::<Result<Vec<_>>>()?;

    Ok(PackageIndex {
        default_namespace,
        packages,
    })
}

fn into_package(raw: RawPackage) -> Result<Package> {
    let dependencies = raw
        .dependencies
        .into_iter()
        .map(|dep| into_dependency(&raw.name, dep))
        .collect::<Result<Vec<_>>>()?;

    match raw.namespace {
        Some(namespace) => Package::namespaced(namespace, raw.name, dependencies, raw.installed),
        None => Package::new(raw.name, dependencies, raw.installed),
    }
}

fn into_dependency(package_name: &str, raw: RawDependency) -> Result<Dependency> {
    let (reference, kind) = match raw {
        RawDependency::Reference(reference) => (reference, DependencyKind::Required),
        RawDependency::Detailed { name, kind } => {
            let kind = match kind {
                Some(kind) => DependencyKind::from_str(&kind).map_err(|e| {
                    anyhow::anyhow!("Package '{}', dependency '{}': {}", package_name, name, e)
                })?,
                None => DependencyKind::Required,
            };
            (name, kind)
        }
    };

    if reference.trim().is_empty() {
        anyhow::bail!("Package '{}' declares an empty dependency", package_name);
    }

    Ok(Dependency::new(reference, kind))
}
