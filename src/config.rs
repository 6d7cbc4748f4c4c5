//! Configuration file support for releng-sbom.
//!
//! Provides YAML-based configuration through `releng-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::application::dto::FormatSelector;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "releng-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Format selectors, e.g. `[json, rdf-spdx]` or `[all]`
    pub formats: Option<Vec<String>>,
    pub output_dir: Option<PathBuf>,
    pub inventory: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed format selectors; `None` when the file sets no formats
    pub fn format_selectors(&self) -> Result<Option<Vec<FormatSelector>>> {
        let Some(formats) = &self.formats else {
            return Ok(None);
        };

        let selectors = formats
            .iter()
            .map(|format| {
                format.parse::<FormatSelector>().map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid config: {}\n\n💡 Hint: Check the `formats` list in {}.",
                        e,
                        CONFIG_FILENAME
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(selectors))
    }

    pub fn unknown_field_names(&self) -> impl Iterator<Item = &str> {
        self.unknown_fields.keys().map(String::as_str)
    }

    /// Resolves relative paths against the directory holding the file
    fn resolve_paths(&mut self, base_dir: &Path) {
        for path in [&mut self.output_dir, &mut self.inventory].into_iter().flatten() {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    if let Some(base_dir) = path.parent() {
        config.resolve_paths(base_dir);
    }

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
    config.format_selectors()?;

    if let Some(formats) = &config.formats {
        if formats.is_empty() {
            bail!(
                "Invalid config: `formats` must not be empty.\n\n\
                 💡 Hint: Remove the key to emit the default text report."
            );
        }
    }
    Ok(())
}
