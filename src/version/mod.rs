//! Package version resolution.
//!
//! This module provides:
//! - Install detection (package-manager prefix vs source checkout)
//! - Parsing of package listings and tag descriptions
//! - [`VersionResolver`], which combines them with a fixed fallback
//! - [`version()`], the cached version of the running package
//!
//! # Example
//!
//! ```
//! use polyver::version::{format_describe, find_package_version};
//!
//! assert_eq!(format_describe("v1.0-5-gabcdef\n").unwrap(), "5_gabcdef");
//! assert_eq!(
//!     find_package_version("polymetis 1.2.3 py_0\n", "polymetis").as_deref(),
//!     Some("1.2.3")
//! );
//! ```

pub mod describe;
pub mod install;
pub mod listing;
pub mod queries;
pub mod resolution;
pub mod resolver;

pub use describe::format_describe;
pub use install::{current_package_location, detect_install, InstallContext, InstallKind};
pub use listing::find_package_version;
pub use queries::{ExternalQueries, SystemQueries};
pub use resolution::{
    FallbackReason, Resolution, VersionSource, DEFAULT_INSTALL_ROOT_VAR, DEFAULT_PACKAGE,
    DEFAULT_VERSION,
};
pub use resolver::{ResolverSettings, VersionResolver};

use std::sync::OnceLock;

static VERSION: OnceLock<Resolution> = OnceLock::new();

/// Resolution for the default package, computed once per process.
///
/// Uses the built-in settings, the system commands and the current
/// executable as package location.
pub fn resolution() -> &'static Resolution {
    VERSION.get_or_init(|| {
        let resolver = VersionResolver::new(ResolverSettings::default(), SystemQueries::default());
        resolver.resolve_from_env(current_package_location())
    })
}

/// Version string of the running package. Never empty.
pub fn version() -> &'static str {
    &resolution().version
}
