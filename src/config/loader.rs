//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! their locations in the correct priority order.

use crate::config::environment::ConfigOverrides;
use crate::config::merger::merge_configs;
use crate::config::schema::PolyverConfig;
use crate::config::validator::validate;
use crate::error::{PolyverError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".polyver.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Built-in defaults
/// 2. User global config (`~/.polyver/config.yml`)
/// 3. Project config (`.polyver.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.polyver/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .polyver.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
        }
    }

    /// Find user's global config at ~/.polyver/config.yml
    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".polyver").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Find project config at .polyver.yml
    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Parse YAML content into a config, filling unset fields with defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<PolyverConfig> {
    let value = parse_value(content, source_path)?;
    from_layers(&[value], source_path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PolyverConfig> {
    let value = load_config_value(path)?;
    from_layers(&[value], path)
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PolyverError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PolyverError::Io(e)
        }
    })?;

    parse_value(&content, path)
}

/// Load and merge all discovered config files.
///
/// Missing files are not an error: the built-in defaults apply.
pub fn load_merged_config(project_root: &Path) -> Result<PolyverConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("loading config from {}", path.display());
        layers.push(load_config_value(path)?);
    }

    from_layers(&layers, &project_root.join(PROJECT_CONFIG_FILE))
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PolyverConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}

/// Load the config the resolver actually runs with.
///
/// Files first, then `POLYVER_*` environment variables, then `overrides`
/// (CLI flags). The result is validated.
pub fn load_effective_config(
    project_root: &Path,
    config_override: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<PolyverConfig> {
    let mut config = load_config(project_root, config_override)?;
    ConfigOverrides::from_env().apply(&mut config);
    overrides.apply(&mut config);
    validate(&config)?;
    Ok(config)
}

fn parse_value(content: &str, path: &Path) -> Result<serde_yaml::Value> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| PolyverError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses as null; treat it as an empty mapping.
    if value.is_null() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    Ok(value)
}

fn from_layers(layers: &[serde_yaml::Value], path: &Path) -> Result<PolyverConfig> {
    let defaults = serde_yaml::to_value(PolyverConfig::default())
        .map_err(|e| PolyverError::Other(e.into()))?;

    let mut all = Vec::with_capacity(layers.len() + 1);
    all.push(defaults);
    all.extend_from_slice(layers);

    serde_yaml::from_value(merge_configs(&all)).map_err(|e| PolyverError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
