//! Shared formatting for command output.

use serde::Serialize;

use crate::version::{InstallContext, InstallKind, Resolution};

/// One-line description of an install.
pub fn format_install(kind: &InstallKind, ctx: &InstallContext) -> String {
    match kind {
        InstallKind::Managed { prefix } => format!("managed ({})", prefix),
        InstallKind::SourceCheckout => format!("source ({})", ctx.package_dir().display()),
    }
}

/// One-line description of where a version came from.
pub fn format_source(resolution: &Resolution) -> String {
    match resolution.fallback_reason() {
        Some(reason) => format!("{} ({})", resolution.source.name(), reason),
        None => resolution.source.name().to_string(),
    }
}

/// Machine-readable report printed by `show --json`.
#[derive(Debug, Serialize)]
pub struct VersionReport<'a> {
    pub package: &'a str,
    #[serde(flatten)]
    pub resolution: &'a Resolution,
    pub install: &'a InstallKind,
}
