//! Environment variable and command-line overrides.
//!
//! Overrides sit above every config file: environment variables first,
//! then explicit CLI flags.

use std::path::PathBuf;

use super::schema::PolyverConfig;

/// Overrides the package name.
pub const ENV_PACKAGE: &str = "POLYVER_PACKAGE";

/// Overrides the default version.
pub const ENV_DEFAULT_VERSION: &str = "POLYVER_DEFAULT_VERSION";

/// Overrides the install-root marker variable name.
pub const ENV_INSTALL_ROOT_VAR: &str = "POLYVER_INSTALL_ROOT_VAR";

/// Values that replace configured ones when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub package: Option<String>,
    pub default_version: Option<String>,
    pub install_root_var: Option<String>,
    pub package_location: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Read overrides through `lookup`. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            package: get(ENV_PACKAGE),
            default_version: get(ENV_DEFAULT_VERSION),
            install_root_var: get(ENV_INSTALL_ROOT_VAR),
            package_location: None,
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply the overrides that are set.
    pub fn apply(&self, config: &mut PolyverConfig) {
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(default_version) = &self.default_version {
            config.default_version = default_version.clone();
        }
        if let Some(var) = &self.install_root_var {
            config.install_root_var = var.clone();
        }
        if let Some(location) = &self.package_location {
            config.package_location = Some(location.clone());
        }
    }
}
