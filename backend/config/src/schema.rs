//! RelayForge configuration schema.
//!
//! Typed for serde YAML deserialization with camelCase keys. Every section is
//! optional so a partial file still loads; defaults fill the gaps.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayForgeConfig {
    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Message filter configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FiltersConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Directory for rolling JSON log files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_saving_bypass: Option<RestrictSavingBypassConfig>,

    /// Messages whose text contains one of these words are not forwarded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictSavingBypassConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Name for re-uploaded photos that carry no file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_photo_name: Option<String>,
}

impl RelayForgeConfig {
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    pub fn log_dir(&self) -> Option<&str> {
        self.logging.as_ref()?.dir.as_deref()
    }

    pub fn bypass(&self) -> Option<&RestrictSavingBypassConfig> {
        self.filters.as_ref()?.restrict_saving_bypass.as_ref()
    }

    pub fn skip_keywords(&self) -> &[String] {
        self.filters
            .as_ref()
            .map(|f| f.skip_keywords.as_slice())
            .unwrap_or_default()
    }
}
