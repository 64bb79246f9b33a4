//! Config defaults: fills unset values after load.

use crate::schema::{FiltersConfig, LoggingConfig, RelayForgeConfig, RestrictSavingBypassConfig};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default directory for rolling log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default name for re-uploaded photos without a file name.
pub const DEFAULT_PHOTO_NAME: &str = "photo.jpg";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: RelayForgeConfig) -> RelayForgeConfig {
    let config = apply_logging_defaults(config);
    apply_filter_defaults(config)
}

fn apply_logging_defaults(mut config: RelayForgeConfig) -> RelayForgeConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.dir.is_none() {
        logging.dir = Some(DEFAULT_LOG_DIR.to_string());
    }
    config
}

/// The bypass is on unless explicitly disabled.
fn apply_filter_defaults(mut config: RelayForgeConfig) -> RelayForgeConfig {
    let filters = config.filters.get_or_insert_with(FiltersConfig::default);
    let bypass = filters
        .restrict_saving_bypass
        .get_or_insert_with(RestrictSavingBypassConfig::default);
    if bypass.enabled.is_none() {
        bypass.enabled = Some(true);
    }
    if bypass.default_photo_name.is_none() {
        bypass.default_photo_name = Some(DEFAULT_PHOTO_NAME.to_string());
    }
    config
}
