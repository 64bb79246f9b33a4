//! Config validation with user-friendly error messages.

use crate::schema::RelayForgeConfig;
use thiserror::Error;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &RelayForgeConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_logging(config, &mut report);
    validate_filters(config, &mut report);
    report
}

fn validate_logging(config: &RelayForgeConfig, report: &mut ValidationReport) {
    let Some(level) = config.log_level() else { return };
    // EnvFilter accepts directives too, so an unknown level is only suspicious.
    if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        report.warn(
            "logging.level",
            format!("Unknown log level '{level}'; treated as a filter directive"),
        );
    }
}

fn validate_filters(config: &RelayForgeConfig, report: &mut ValidationReport) {
    if let Some(bypass) = config.bypass() {
        if let Some(name) = &bypass.default_photo_name {
            if name.trim().is_empty() {
                report.error(
                    "filters.restrictSavingBypass.defaultPhotoName",
                    "Default photo name cannot be empty",
                );
            }
        }
    }

    for (i, keyword) in config.skip_keywords().iter().enumerate() {
        if keyword.trim().is_empty() {
            report.error(format!("filters.skipKeywords[{i}]"), "Keyword cannot be blank");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_config;

    #[test]
    fn default_config_is_valid() {
        let report = validate(&crate::apply_all_defaults(RelayForgeConfig::default()));
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn empty_photo_name_is_error() {
        let config = parse_config(
            "filters:\n  restrictSavingBypass:\n    defaultPhotoName: \"  \"\n",
        )
        .unwrap();
        let report = validate(&config);
        assert!(!report.is_valid());
        assert_eq!(
            report.errors[0].path,
            "filters.restrictSavingBypass.defaultPhotoName"
        );
    }

    #[test]
    fn blank_keyword_is_error() {
        let config = parse_config("filters:\n  skipKeywords: [ok, \"\"]\n").unwrap();
        let report = validate(&config);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "filters.skipKeywords[1]");
    }

    #[test]
    fn unknown_level_is_warning() {
        let config = parse_config("logging:\n  level: chatty\n").unwrap();
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
