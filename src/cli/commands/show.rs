//! Show command implementation.
//!
//! `polyver show` (also the default command) prints the resolved version.
//! Resolution itself never fails, so neither does this command.

use crate::cli::args::ShowArgs;
use crate::config::PolyverConfig;
use crate::error::{PolyverError, Result};
use crate::ui::UserInterface;
use crate::version::{
    detect_install, ExternalQueries, InstallContext, ResolverSettings, SystemQueries,
    VersionResolver,
};

use super::dispatcher::{Command, CommandResult};
use super::display::{format_install, format_source, VersionReport};

/// The show command implementation.
pub struct ShowCommand {
    config: PolyverConfig,
    args: ShowArgs,
    context: InstallContext,
    queries: Box<dyn ExternalQueries>,
}

impl ShowCommand {
    /// Create a show command using the system package manager and VCS.
    pub fn new(config: PolyverConfig, args: ShowArgs) -> Self {
        let context = InstallContext::from_config(&config);
        let queries = Box::new(SystemQueries::from_config(&config));
        Self {
            config,
            args,
            context,
            queries,
        }
    }

    /// Replace the external queries.
    pub fn with_queries(mut self, queries: Box<dyn ExternalQueries>) -> Self {
        self.queries = queries;
        self
    }

    /// Replace the install context.
    pub fn with_context(mut self, context: InstallContext) -> Self {
        self.context = context;
        self
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolver = VersionResolver::new(
            ResolverSettings::from(&self.config),
            self.queries.as_ref(),
        );
        let resolution = resolver.resolve(&self.context);
        let install = detect_install(&self.context);

        if self.args.json {
            let report = VersionReport {
                package: &self.config.package,
                resolution: &resolution,
                install: &install,
            };
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| PolyverError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&resolution.version);

        if let Some(reason) = resolution.fallback_reason() {
            ui.warning(&format!(
                "using default version {}: {}",
                resolution.version, reason
            ));
        }

        if self.args.explain {
            ui.message(&format!("package: {}", self.config.package));
            ui.message(&format!("source: {}", format_source(&resolution)));
            ui.message(&format!(
                "install: {}",
                format_install(&install, &self.context)
            ));
        } else {
            ui.detail(&format!("package: {}", self.config.package));
            ui.detail(&format!("source: {}", format_source(&resolution)));
            ui.detail(&format!(
                "install: {}",
                format_install(&install, &self.context)
            ));
        }

        Ok(CommandResult::success())
    }
}
