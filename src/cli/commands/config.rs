//! Config command implementation.
//!
//! The `polyver config` command shows the effective configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{ConfigPaths, PolyverConfig};
use crate::error::{PolyverError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    config: PolyverConfig,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(
        project_root: &Path,
        config_override: Option<PathBuf>,
        config: PolyverConfig,
        args: ConfigArgs,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            config,
            args,
        }
    }

    /// Config files that contributed, in merge order.
    fn sources(&self) -> Vec<PathBuf> {
        match &self.config_override {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(&self.config)
                .map_err(|e| PolyverError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let sources = self.sources();
        if sources.is_empty() {
            ui.message("# built-in defaults");
        } else {
            for path in &sources {
                ui.message(&format!("# {}", path.display()));
            }
        }
        ui.message("");

        let yaml = serde_yaml::to_string(&self.config).map_err(|e| PolyverError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}
