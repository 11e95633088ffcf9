//! Layered version resolution.
//!
//! Managed installs take their version from the package manager listing,
//! source checkouts from the tag description. Every failure degrades to the
//! configured default version; [`VersionResolver::resolve`] cannot fail.

use std::path::PathBuf;

use crate::config::PolyverConfig;

use super::describe::format_describe;
use super::install::{detect_install, InstallContext};
use super::listing::find_package_version;
use super::queries::ExternalQueries;
use super::resolution::{
    FallbackReason, Resolution, VersionSource, DEFAULT_INSTALL_ROOT_VAR, DEFAULT_PACKAGE,
    DEFAULT_VERSION,
};

/// What the resolver looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Package name matched against the first listing column.
    pub package: String,
    /// Version used when nothing else is found.
    pub default_version: String,
    /// Environment variable holding the package manager's install root.
    pub install_root_var: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            default_version: DEFAULT_VERSION.to_string(),
            install_root_var: DEFAULT_INSTALL_ROOT_VAR.to_string(),
        }
    }
}

impl From<&PolyverConfig> for ResolverSettings {
    fn from(config: &PolyverConfig) -> Self {
        Self {
            package: config.package.clone(),
            default_version: config.default_version.clone(),
            install_root_var: config.install_root_var.clone(),
        }
    }
}

/// Resolves a package version with a fixed fallback.
pub struct VersionResolver<Q> {
    settings: ResolverSettings,
    queries: Q,
}

impl<Q: ExternalQueries> VersionResolver<Q> {
    /// Create a resolver.
    pub fn new(settings: ResolverSettings, queries: Q) -> Self {
        Self { settings, queries }
    }

    /// Build the install context from the process environment.
    pub fn context_from_env(&self, package_location: impl Into<PathBuf>) -> InstallContext {
        InstallContext::from_env(&self.settings.install_root_var, package_location)
    }

    /// Resolve using the marker variable from the process environment.
    pub fn resolve_from_env(&self, package_location: impl Into<PathBuf>) -> Resolution {
        let ctx = self.context_from_env(package_location);
        self.resolve(&ctx)
    }

    /// Resolve the version for the given install context.
    ///
    /// The returned version is never empty.
    pub fn resolve(&self, ctx: &InstallContext) -> Resolution {
        let install = detect_install(ctx);
        tracing::debug!(
            "resolving {} ({} install at {})",
            self.settings.package,
            install.name(),
            ctx.package_location.display()
        );

        let outcome = if install.is_managed() {
            self.from_package_manager()
        } else {
            self.from_source_control(ctx)
        };

        let resolution = match outcome {
            Ok(resolution) if resolution.version.is_empty() => {
                self.fallback(FallbackReason::EmptyVersion)
            }
            Ok(resolution) => resolution,
            Err(reason) => self.fallback(reason),
        };

        if resolution.is_fallback() {
            tracing::debug!(
                "using default version {} for {}",
                resolution.version,
                self.settings.package
            );
        } else {
            tracing::debug!(
                "resolved {} {} from {}",
                self.settings.package,
                resolution.version,
                resolution.source.name()
            );
        }

        resolution
    }

    fn from_package_manager(&self) -> Result<Resolution, FallbackReason> {
        let listing = self.queries.package_listing().map_err(|e| {
            tracing::debug!("package listing failed: {}", e);
            FallbackReason::QueryFailed {
                message: e.to_string(),
            }
        })?;

        find_package_version(&listing, &self.settings.package)
            .map(|version| Resolution::resolved(version, VersionSource::PackageManager))
            .ok_or(FallbackReason::NoPackageMatch)
    }

    fn from_source_control(&self, ctx: &InstallContext) -> Result<Resolution, FallbackReason> {
        let dir = ctx.package_dir();
        let output = self.queries.describe_tags(&dir).map_err(|e| {
            tracing::debug!("tag describe in {} failed: {}", dir.display(), e);
            FallbackReason::QueryFailed {
                message: e.to_string(),
            }
        })?;

        format_describe(&output)
            .map(|version| Resolution::resolved(version, VersionSource::SourceControl))
    }

    fn fallback(&self, reason: FallbackReason) -> Resolution {
        let default = if self.settings.default_version.is_empty() {
            DEFAULT_VERSION
        } else {
            &self.settings.default_version
        };
        Resolution::fallback(default, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PolyverError, Result};
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct StubQueries {
        listing: Option<String>,
        describe: Option<String>,
        describe_dirs: RefCell<Vec<PathBuf>>,
        listing_calls: RefCell<usize>,
    }

    impl ExternalQueries for StubQueries {
        fn package_listing(&self) -> Result<String> {
            *self.listing_calls.borrow_mut() += 1;
            self.listing.clone().ok_or(PolyverError::CommandFailed {
                command: "conda list".into(),
                code: Some(1),
            })
        }

        fn describe_tags(&self, dir: &Path) -> Result<String> {
            self.describe_dirs.borrow_mut().push(dir.to_path_buf());
            self.describe.clone().ok_or(PolyverError::CommandFailed {
                command: "git describe --tags".into(),
                code: Some(128),
            })
        }
    }

    fn managed() -> InstallContext {
        InstallContext::new(
            Some("/opt/conda/envs/robot".into()),
            "/opt/conda/envs/robot/lib/polymetis/__init__.py",
        )
    }

    fn checkout() -> InstallContext {
        InstallContext::new(None, "/home/dev/polymetis/python/polymetis/__init__.py")
    }

    fn resolver(queries: StubQueries) -> VersionResolver<StubQueries> {
        VersionResolver::new(ResolverSettings::default(), queries)
    }

    #[test]
    fn managed_uses_listing() {
        let r = resolver(StubQueries {
            listing: Some("polymetis 1.2.3 py_0 local\n".into()),
            ..Default::default()
        });
        let resolution = r.resolve(&managed());
        assert_eq!(resolution.version, "1.2.3");
        assert_eq!(resolution.source, VersionSource::PackageManager);
    }

    #[test]
    fn managed_without_match_defaults() {
        let r = resolver(StubQueries {
            listing: Some("numpy 1.26.4 py_0\n".into()),
            ..Default::default()
        });
        let resolution = r.resolve(&managed());
        assert_eq!(resolution.version, DEFAULT_VERSION);
        assert_eq!(
            resolution.fallback_reason(),
            Some(&FallbackReason::NoPackageMatch)
        );
    }

    #[test]
    fn managed_never_runs_describe() {
        let r = resolver(StubQueries {
            listing: Some("polymetis 1.2.3\n".into()),
            describe: Some("v1.0-5-gabcdef\n".into()),
            ..Default::default()
        });
        r.resolve(&managed());
        assert!(r.queries.describe_dirs.borrow().is_empty());
    }

    #[test]
    fn listing_failure_defaults() {
        let r = resolver(StubQueries::default());
        let resolution = r.resolve(&managed());
        assert_eq!(resolution.version, DEFAULT_VERSION);
        assert!(matches!(
            resolution.fallback_reason(),
            Some(FallbackReason::QueryFailed { .. })
        ));
    }

    #[test]
    fn checkout_uses_describe_in_package_dir() {
        let r = resolver(StubQueries {
            describe: Some("v1.0-5-gabcdef\n".into()),
            ..Default::default()
        });
        let resolution = r.resolve(&checkout());
        assert_eq!(resolution.version, "5_gabcdef");
        assert_eq!(resolution.source, VersionSource::SourceControl);
        assert_eq!(
            r.queries.describe_dirs.borrow().as_slice(),
            &[PathBuf::from("/home/dev/polymetis/python/polymetis")]
        );
        assert_eq!(*r.queries.listing_calls.borrow(), 0);
    }

    #[test]
    fn describe_failure_defaults() {
        let r = resolver(StubQueries::default());
        let resolution = r.resolve(&checkout());
        assert_eq!(resolution.version, DEFAULT_VERSION);
        assert!(matches!(
            resolution.fallback_reason(),
            Some(FallbackReason::QueryFailed { message }) if message.contains("git describe")
        ));
    }

    #[test]
    fn lone_hyphen_describe_joins_empty_parts() {
        let r = resolver(StubQueries {
            describe: Some("-\n".into()),
            ..Default::default()
        });
        let resolution = r.resolve(&checkout());
        assert_eq!(resolution.version, "_");
    }

    #[test]
    fn configured_default_is_used() {
        let settings = ResolverSettings {
            default_version: "0.0.0+unknown".into(),
            ..Default::default()
        };
        let r = VersionResolver::new(settings, StubQueries::default());
        assert_eq!(r.resolve(&checkout()).version, "0.0.0+unknown");
    }

    #[test]
    fn empty_configured_default_falls_back_to_builtin() {
        let settings = ResolverSettings {
            default_version: String::new(),
            ..Default::default()
        };
        let r = VersionResolver::new(settings, StubQueries::default());
        assert_eq!(r.resolve(&checkout()).version, DEFAULT_VERSION);
    }

    #[test]
    fn settings_from_config() {
        let config = PolyverConfig {
            package: "torchcontrol".into(),
            ..Default::default()
        };
        let settings = ResolverSettings::from(&config);
        assert_eq!(settings.package, "torchcontrol");
        assert_eq!(settings.default_version, DEFAULT_VERSION);
        assert_eq!(settings.install_root_var, DEFAULT_INSTALL_ROOT_VAR);
    }
}
