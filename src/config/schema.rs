//! Configuration schema definitions for polyver.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format. Every field is optional in the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::version::{DEFAULT_INSTALL_ROOT_VAR, DEFAULT_PACKAGE, DEFAULT_VERSION};

/// Root configuration structure for `.polyver.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyverConfig {
    /// Package whose version is resolved
    pub package: String,

    /// Version reported when resolution falls back. Must be a YAML string,
    /// so numeric-looking versions need quotes (`"1.0"`).
    pub default_version: String,

    /// Environment variable holding the package manager's install root
    pub install_root_var: String,

    /// Location of the package's code (defaults to the current executable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_location: Option<PathBuf>,

    /// Command printing the installed-package listing
    pub package_manager: CommandSpec,

    /// Command printing the tag description of the source tree
    pub source_control: CommandSpec,
}

impl Default for PolyverConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            default_version: DEFAULT_VERSION.to_string(),
            install_root_var: DEFAULT_INSTALL_ROOT_VAR.to_string(),
            package_location: None,
            package_manager: CommandSpec::default_package_manager(),
            source_control: CommandSpec::default_source_control(),
        }
    }
}

/// An external program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program name or path
    pub command: String,

    /// Arguments passed verbatim
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command spec.
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// `conda list`
    pub fn default_package_manager() -> Self {
        Self::new("conda", vec!["list".to_string()])
    }

    /// `git describe --tags`
    pub fn default_source_control() -> Self {
        Self::new("git", vec!["describe".to_string(), "--tags".to_string()])
    }
}
