//! Install detection.
//!
//! Decides whether the package runs from a package-manager prefix or from a
//! source checkout, which determines where its version comes from.

use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::PolyverConfig;

/// How the package was installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstallKind {
    /// Installed by a package manager under `prefix`
    Managed { prefix: String },
    /// Running from a version-controlled source tree
    SourceCheckout,
}

impl InstallKind {
    /// Get a human-readable name for this install kind.
    pub fn name(&self) -> &str {
        match self {
            InstallKind::Managed { .. } => "managed",
            InstallKind::SourceCheckout => "source",
        }
    }

    /// Check if the package manager owns this install.
    pub fn is_managed(&self) -> bool {
        matches!(self, InstallKind::Managed { .. })
    }
}

/// Inputs to install detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallContext {
    /// Value of the install-root marker variable, if set. An empty value
    /// is kept and matches every location.
    pub install_root: Option<String>,
    /// Location of the running package's code.
    pub package_location: PathBuf,
}

impl InstallContext {
    /// Create a context from explicit values.
    pub fn new(install_root: Option<String>, package_location: impl Into<PathBuf>) -> Self {
        Self {
            install_root,
            package_location: package_location.into(),
        }
    }

    /// Read the install-root marker from the process environment.
    pub fn from_env(install_root_var: &str, package_location: impl Into<PathBuf>) -> Self {
        Self::new(env::var(install_root_var).ok(), package_location)
    }

    /// Context for `config`: its marker variable and package location,
    /// falling back to the current executable.
    pub fn from_config(config: &PolyverConfig) -> Self {
        let location = config
            .package_location
            .clone()
            .unwrap_or_else(current_package_location);
        Self::from_env(&config.install_root_var, location)
    }

    /// Directory the source-control query runs in.
    ///
    /// The location itself if it is a directory, otherwise its parent.
    pub fn package_dir(&self) -> PathBuf {
        if self.package_location.is_dir() {
            return self.package_location.clone();
        }
        match self.package_location.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Detect how the package was installed.
///
/// Managed when the install root is set and appears anywhere in the
/// package location. This is a substring test, not a path-prefix test, so
/// a marker that is set but empty marks every location as managed.
pub fn detect_install(ctx: &InstallContext) -> InstallKind {
    match &ctx.install_root {
        Some(root) if location_contains(&ctx.package_location, root) => InstallKind::Managed {
            prefix: root.clone(),
        },
        _ => InstallKind::SourceCheckout,
    }
}

fn location_contains(location: &Path, root: &str) -> bool {
    location.to_string_lossy().contains(root)
}

/// Location of the running package: the current executable.
pub fn current_package_location() -> PathBuf {
    env::current_exe().unwrap_or_else(|_| PathBuf::from("."))
}
