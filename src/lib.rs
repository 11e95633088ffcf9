//! polyver - Layered package version resolution.
//!
//! Resolves the version string of an installed package. A package living
//! under a package manager's install root takes its version from the
//! manager's listing; a source checkout takes it from the nearest tag
//! description. Anything else falls back to a fixed default, so resolution
//! always produces a usable string.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//! - [`version`] - Install detection and version resolution
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use polyver::version::{
//!     ExternalQueries, InstallContext, ResolverSettings, VersionResolver,
//! };
//!
//! struct Tagged;
//!
//! impl ExternalQueries for Tagged {
//!     fn package_listing(&self) -> polyver::Result<String> {
//!         Ok(String::new())
//!     }
//!     fn describe_tags(&self, _dir: &Path) -> polyver::Result<String> {
//!         Ok("v1.0-5-gabcdef\n".to_string())
//!     }
//! }
//!
//! let resolver = VersionResolver::new(ResolverSettings::default(), Tagged);
//! let ctx = InstallContext::new(None, "/home/dev/polymetis/python/polymetis");
//! assert_eq!(resolver.resolve(&ctx).version, "5_gabcdef");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{PolyverError, Result};
pub use version::{version, Resolution};
