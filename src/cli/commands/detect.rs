//! Detect command implementation.
//!
//! The `polyver detect` command reports whether the package is a managed
//! install or a source checkout, without running any query.

use crate::cli::args::DetectArgs;
use crate::config::PolyverConfig;
use crate::error::{PolyverError, Result};
use crate::ui::UserInterface;
use crate::version::{detect_install, InstallContext};

use super::dispatcher::{Command, CommandResult};
use super::display::format_install;

/// The detect command implementation.
pub struct DetectCommand {
    config: PolyverConfig,
    args: DetectArgs,
    context: InstallContext,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(config: PolyverConfig, args: DetectArgs) -> Self {
        let context = InstallContext::from_config(&config);
        Self {
            config,
            args,
            context,
        }
    }

    /// Replace the install context.
    pub fn with_context(mut self, context: InstallContext) -> Self {
        self.context = context;
        self
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let install = detect_install(&self.context);

        if self.args.json {
            let report = serde_json::json!({
                "package": self.config.package,
                "install_root_var": self.config.install_root_var,
                "package_location": self.context.package_location,
                "install": install,
            });
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| PolyverError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.message(&format_install(&install, &self.context));
            ui.detail(&format!(
                "{}: {}",
                self.config.install_root_var,
                self.context.install_root.as_deref().unwrap_or("(unset)")
            ));
            ui.detail(&format!(
                "location: {}",
                self.context.package_location.display()
            ));
        }

        Ok(CommandResult::success())
    }
}
