//! Configuration loading, parsing, and validation for polyver.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - Environment and CLI overrides in [`environment`]
//!
//! # Example
//!
//! ```
//! use polyver::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".polyver.yml"), "package: torchcontrol").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.package, "torchcontrol");
//! assert_eq!(config.default_version, "0.2.0-dev");
//! ```
//!
//! # Configuration Sources
//!
//! Later sources override earlier ones:
//! 1. Built-in defaults
//! 2. User global config (`~/.polyver/config.yml`)
//! 3. Project config (`.polyver.yml`)
//! 4. `POLYVER_*` environment variables
//! 5. Command-line flags

pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{CommandSpec, PolyverConfig};

pub use loader::{
    load_config, load_config_file, load_config_value, load_effective_config, load_merged_config,
    parse_config, ConfigPaths, PROJECT_CONFIG_FILE,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};

pub use environment::{
    ConfigOverrides, ENV_DEFAULT_VERSION, ENV_INSTALL_ROOT_VAR, ENV_PACKAGE,
};
