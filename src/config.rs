//! Configuration file support for pkg-uses.
//!
//! Provides YAML-based defaults through `pkg-uses.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line switches.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::dependents::policies::FilterPolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pkg-uses.config.yml";

/// Package index used when neither the command line nor the config names one.
pub const DEFAULT_REGISTRY: &str = "packages.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry: Option<PathBuf>,
    pub include_build: Option<bool>,
    pub include_test: Option<bool>,
    pub include_optional: Option<bool>,
    pub skip_recommended: Option<bool>,
    pub installed: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Combines the command-line policy with the configured defaults.
    ///
    /// A switch given on the command line is always on; otherwise the
    /// config value applies.
    pub fn merge_policy(&self, cli: FilterPolicy) -> FilterPolicy {
        FilterPolicy::new(
            merge_switch(cli.include_build, self.include_build),
            merge_switch(cli.include_test, self.include_test),
            merge_switch(cli.include_optional, self.include_optional),
            merge_switch(cli.skip_recommended, self.skip_recommended),
        )
    }

    pub fn merge_installed(&self, cli: bool) -> bool {
        merge_switch(cli, self.installed)
    }

    /// Picks the package index: `--registry`, then `registry`, then
    /// [`DEFAULT_REGISTRY`].
    pub fn registry_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.registry.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY))
    }
}

fn merge_switch(cli: bool, config: Option<bool>) -> bool {
    cli || config.unwrap_or(false)
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref registry) = config.registry {
        if registry.as_os_str().is_empty() {
            bail!(
                "Invalid config: registry must not be empty.\n\n\
                 💡 Hint: Point 'registry' at a package index file (e.g., \"./packages.toml\") or remove the field."
            );
        }
    }
    Ok(())
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
