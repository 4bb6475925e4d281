//! Shell layout configuration.
//!
//! The defaults are authored in `shell.config.toml`, validated by the build script, and embedded
//! as JSON. Everything that needs a layout constant receives a [`ShellConfig`] value instead of
//! reading a global.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generated::SHELL_CONFIG_JSON;

/// Errors raised while loading or validating a [`ShellConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse shell config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid shell config value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub min_window_width: f64,
    pub min_window_height: f64,
    pub taskbar_height: f64,
    /// Vertical room kept below a dragged window's top edge above the taskbar.
    pub titlebar_drag_allowance: f64,
    pub cascade_step: f64,
    pub initial_z_index: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            min_window_width: 400.0,
            min_window_height: 300.0,
            taskbar_height: 48.0,
            titlebar_drag_allowance: 32.0,
            cascade_step: 30.0,
            initial_z_index: 1,
        }
    }
}

impl ShellConfig {
    /// Parses and validates the configuration embedded at build time.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(SHELL_CONFIG_JSON)
    }

    /// Returns the embedded configuration, or the defaults when it cannot be loaded.
    pub fn builtin_or_default() -> Self {
        match Self::builtin() {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("using default shell config: {err}");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("min_window_width", self.min_window_width)?;
        require_positive("min_window_height", self.min_window_height)?;
        require_positive("taskbar_height", self.taskbar_height)?;
        require_non_negative("titlebar_drag_allowance", self.titlebar_drag_allowance)?;
        require_non_negative("cascade_step", self.cascade_step)?;
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_config_matches_documented_defaults() {
        let config = ShellConfig::builtin().expect("embedded config parses");
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn schema_version_field_is_tolerated() {
        let raw = r#"{
            "schema_version": 1,
            "min_window_width": 320,
            "min_window_height": 200,
            "taskbar_height": 40,
            "titlebar_drag_allowance": 0,
            "cascade_step": 16,
            "initial_z_index": 10
        }"#;
        let config = ShellConfig::from_json(raw).expect("valid config");
        assert_eq!(config.min_window_width, 320.0);
        assert_eq!(config.initial_z_index, 10);
    }

    #[test]
    fn non_positive_minimums_are_rejected() {
        let config = ShellConfig {
            min_window_height: 0.0,
            ..ShellConfig::default()
        };
        let err = config.validate().expect_err("zero height rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "min_window_height",
                ..
            }
        ));
    }

    #[test]
    fn negative_cascade_step_is_rejected() {
        let config = ShellConfig {
            cascade_step: -1.0,
            ..ShellConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = ShellConfig::from_json("{").expect_err("truncated input");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
