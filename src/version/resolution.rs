//! Resolution result types.

use serde::Serialize;
use std::fmt;

/// Version used whenever nothing better can be determined.
pub const DEFAULT_VERSION: &str = "0.2.0-dev";

/// Package whose version is resolved when none is configured.
pub const DEFAULT_PACKAGE: &str = "polymetis";

/// Environment variable naming the package manager's install root.
pub const DEFAULT_INSTALL_ROOT_VAR: &str = "CONDA_PREFIX";

/// Why the resolver fell back to the default version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The package listing has no line for the package.
    NoPackageMatch,
    /// The tag-describe query printed nothing.
    NoDescribeOutput,
    /// The tag-describe output has fewer than two hyphen-separated parts.
    MalformedDescribe { output: String },
    /// An external query could not run or exited non-zero.
    QueryFailed { message: String },
    /// A branch produced an empty version string.
    EmptyVersion,
}

impl FallbackReason {
    /// Human-readable description.
    pub fn describe(&self) -> String {
        match self {
            FallbackReason::NoPackageMatch => "package not found in package listing".to_string(),
            FallbackReason::NoDescribeOutput => "no tags found in source control".to_string(),
            FallbackReason::MalformedDescribe { output } => {
                format!("unexpected tag description '{}'", output)
            }
            FallbackReason::QueryFailed { message } => format!("query failed: {}", message),
            FallbackReason::EmptyVersion => "resolved version was empty".to_string(),
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Where a resolved version came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum VersionSource {
    /// Version column of the package manager's listing.
    PackageManager,
    /// Reformatted tag description from source control.
    SourceControl,
    /// The configured default.
    Fallback { reason: FallbackReason },
}

impl VersionSource {
    /// Short name, as printed by `--explain` and tagged in JSON.
    pub fn name(&self) -> &str {
        match self {
            VersionSource::PackageManager => "package-manager",
            VersionSource::SourceControl => "source-control",
            VersionSource::Fallback { .. } => "fallback",
        }
    }
}

/// A resolved version string and its provenance.
///
/// The version is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub version: String,
    #[serde(flatten)]
    pub source: VersionSource,
}

impl Resolution {
    /// A version obtained from one of the queries.
    pub fn resolved(version: impl Into<String>, source: VersionSource) -> Self {
        Self {
            version: version.into(),
            source,
        }
    }

    /// The default version, tagged with the reason it was used.
    pub fn fallback(default: impl Into<String>, reason: FallbackReason) -> Self {
        Self {
            version: default.into(),
            source: VersionSource::Fallback { reason },
        }
    }

    /// Whether the default version was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, VersionSource::Fallback { .. })
    }

    /// The fallback reason, if any.
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match &self.source {
            VersionSource::Fallback { reason } => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}
