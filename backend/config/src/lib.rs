//! `relayforge-config` — RelayForge runtime configuration.
//!
//! Provides:
//! - Typed config schema (logging, filters)
//! - YAML loading
//! - Default value application
//! - Validation

pub mod defaults;
pub mod io;
pub mod schema;
pub mod validation;

// Re-export most-used types at crate root.
pub use defaults::apply_all_defaults;
pub use io::{config_dir, config_file_path, load_config, parse_config};
pub use schema::{FiltersConfig, LoggingConfig, RelayForgeConfig, RestrictSavingBypassConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Result};
use std::path::Path;

/// Load, apply defaults to, and validate a config file.
///
/// This is the main entry point for loading a config at runtime. Warnings are
/// logged; any validation error fails the load.
pub async fn load_and_prepare(path: &Path) -> Result<RelayForgeConfig> {
    let config = load_config(path).await?;
    let config = apply_all_defaults(config);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if let Some(first) = report.errors.first() {
        bail!(
            "{} invalid config value(s) in {}; first: {}",
            report.errors.len(),
            path.display(),
            first
        );
    }

    Ok(config)
}
