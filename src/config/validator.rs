//! Configuration validation rules.
//!
//! - `package` must be a single non-empty token (it is compared against the
//!   first whitespace-delimited column of the package listing)
//! - `default_version` must not be empty
//! - `install_root_var` must be a usable environment variable name
//! - Both query commands must name a program

use crate::config::schema::{CommandSpec, PolyverConfig};
use crate::error::{PolyverError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Offending config key
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &PolyverConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.package.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-value",
            "package",
            "'package' must not be empty",
        ));
    } else if config.package.chars().any(char::is_whitespace) {
        errors.push(ValidationError::new(
            "whitespace-package",
            "package",
            format!("'package' must not contain whitespace: '{}'", config.package),
        ));
    }

    if config.default_version.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-value",
            "default_version",
            "'default_version' must not be empty",
        ));
    }

    if config.install_root_var.is_empty()
        || config
            .install_root_var
            .chars()
            .any(|c| c == '=' || c == '\0' || c.is_whitespace())
    {
        errors.push(ValidationError::new(
            "invalid-env-var",
            "install_root_var",
            format!(
                "'install_root_var' is not a valid variable name: '{}'",
                config.install_root_var
            ),
        ));
    }

    errors.extend(validate_command("package_manager", &config.package_manager));
    errors.extend(validate_command("source_control", &config.source_control));

    errors
}

fn validate_command(field: &str, spec: &CommandSpec) -> Option<ValidationError> {
    if spec.command.trim().is_empty() {
        Some(ValidationError::new(
            "missing-command",
            field,
            format!("'{}.command' must name a program", field),
        ))
    } else {
        None
    }
}

/// Validate a configuration, joining all problems into one error.
pub fn validate(config: &PolyverConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PolyverError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&PolyverConfig::default()).is_empty());
        assert!(validate(&PolyverConfig::default()).is_ok());
    }

    #[test]
    fn empty_package_is_rejected() {
        let config = PolyverConfig {
            package: "  ".into(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "package");
        assert_eq!(errors[0].rule, "empty-value");
    }

    #[test]
    fn package_with_spaces_is_rejected() {
        let config = PolyverConfig {
            package: "poly metis".into(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "whitespace-package");
    }

    #[test]
    fn empty_default_version_is_rejected() {
        let config = PolyverConfig {
            default_version: String::new(),
            ..Default::default()
        };
        assert_eq!(validate_config(&config)[0].field, "default_version");
    }

    #[test]
    fn bad_env_var_name_is_rejected() {
        let config = PolyverConfig {
            install_root_var: "CONDA=PREFIX".into(),
            ..Default::default()
        };
        assert_eq!(validate_config(&config)[0].rule, "invalid-env-var");
    }

    #[test]
    fn missing_command_is_rejected() {
        let mut config = PolyverConfig::default();
        config.source_control.command = String::new();
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "source_control");
    }

    #[test]
    fn validate_joins_messages() {
        let config = PolyverConfig {
            package: String::new(),
            default_version: String::new(),
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'package'"));
        assert!(msg.contains("'default_version'"));
        assert!(msg.contains("; "));
    }
}
