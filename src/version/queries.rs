//! External query capabilities.
//!
//! The resolver only needs two facts from the outside world: the package
//! manager's listing and the source-control tag description. Both sit behind
//! [`ExternalQueries`] so tests can substitute canned output.

use std::path::Path;

use crate::config::{CommandSpec, PolyverConfig};
use crate::error::{PolyverError, Result};
use crate::shell::{display_command, execute};

/// Queries the resolver runs against the outside world.
pub trait ExternalQueries {
    /// Full installed-package listing of the package manager.
    fn package_listing(&self) -> Result<String>;

    /// Tag description of the source tree containing `dir`.
    ///
    /// `dir` is the working directory of the query only; implementations
    /// must not change the process working directory.
    fn describe_tags(&self, dir: &Path) -> Result<String>;
}

/// Runs the configured commands as child processes.
#[derive(Debug, Clone)]
pub struct SystemQueries {
    package_manager: CommandSpec,
    source_control: CommandSpec,
}

impl SystemQueries {
    /// Create queries from command specs.
    pub fn new(package_manager: CommandSpec, source_control: CommandSpec) -> Self {
        Self {
            package_manager,
            source_control,
        }
    }

    /// Queries using the commands from `config`.
    pub fn from_config(config: &PolyverConfig) -> Self {
        Self::new(config.package_manager.clone(), config.source_control.clone())
    }

    fn run(spec: &CommandSpec, cwd: Option<&Path>) -> Result<String> {
        let command = display_command(&spec.command, &spec.args);
        tracing::debug!("running `{}`", command);

        let result = execute(&spec.command, &spec.args, cwd)?;
        tracing::debug!("`{}` finished in {:?}", command, result.duration);
        if !result.success {
            tracing::debug!("`{}` stderr: {}", command, result.stderr.trim());
            return Err(PolyverError::CommandFailed {
                command,
                code: result.exit_code,
            });
        }
        Ok(result.stdout)
    }
}

impl Default for SystemQueries {
    fn default() -> Self {
        Self::new(
            CommandSpec::default_package_manager(),
            CommandSpec::default_source_control(),
        )
    }
}

impl ExternalQueries for SystemQueries {
    fn package_listing(&self) -> Result<String> {
        Self::run(&self.package_manager, None)
    }

    fn describe_tags(&self, dir: &Path) -> Result<String> {
        Self::run(&self.source_control, Some(dir))
    }
}

impl<Q: ExternalQueries + ?Sized> ExternalQueries for &Q {
    fn package_listing(&self) -> Result<String> {
        (**self).package_listing()
    }

    fn describe_tags(&self, dir: &Path) -> Result<String> {
        (**self).describe_tags(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(command: &str, args: &[&str]) -> CommandSpec {
        CommandSpec::new(command, args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn default_commands() {
        let queries = SystemQueries::default();
        assert_eq!(queries.package_manager.command, "conda");
        assert_eq!(queries.package_manager.args, vec!["list"]);
        assert_eq!(queries.source_control.command, "git");
        assert_eq!(queries.source_control.args, vec!["describe", "--tags"]);
    }

    #[test]
    fn from_config_copies_commands() {
        let mut config = PolyverConfig::default();
        config.package_manager = spec("mamba", &["list"]);
        let queries = SystemQueries::from_config(&config);
        assert_eq!(queries.package_manager.command, "mamba");
        assert_eq!(queries.source_control.command, "git");
    }

    #[test]
    fn missing_program_is_an_error() {
        let queries = SystemQueries::new(
            spec("polyver-no-such-package-manager", &[]),
            spec("polyver-no-such-vcs", &[]),
        );
        assert!(queries.package_listing().is_err());
        assert!(queries.describe_tags(Path::new(".")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn listing_returns_stdout() {
        let queries = SystemQueries::new(
            spec("echo", &["polymetis 1.2.3 py_0"]),
            spec("true", &[]),
        );
        assert_eq!(queries.package_listing().unwrap(), "polymetis 1.2.3 py_0\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_command_failed() {
        let queries = SystemQueries::new(spec("true", &[]), spec("sh", &["-c", "exit 128"]));
        match queries.describe_tags(Path::new(".")) {
            Err(PolyverError::CommandFailed { code, .. }) => assert_eq!(code, Some(128)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn describe_runs_in_given_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();
        let queries = SystemQueries::new(spec("true", &[]), spec("pwd", &[]));

        let out = queries.describe_tags(temp.path()).unwrap();

        assert_eq!(
            std::path::PathBuf::from(out.trim()).canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
