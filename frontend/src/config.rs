use anyhow::Context;
use serde::Deserialize;
use shared::{Property, ReversedRangePolicy};

use crate::services::logging::{LogLevel, Logger};

/// Configuration baked into the bundle at build time
const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The property shown on the page
    pub property: Property,
    /// How a check-out before check-in is priced
    pub reversed_range: ReversedRangePolicy,
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: AppConfig =
            serde_json::from_str(raw).context("Failed to parse app configuration")?;
        config
            .property
            .validate()
            .context("Invalid property in app configuration")?;
        Ok(config)
    }

    /// Load the embedded configuration, falling back to defaults so the page
    /// always renders.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => {
                Logger::set_level(config.log_level);
                Logger::info_with_component(
                    "AppConfig",
                    &format!(
                        "Loaded configuration for '{}' (reversed ranges: {:?})",
                        config.property.title, config.reversed_range
                    ),
                );
                config
            }
            Err(e) => {
                Logger::error_with_component("AppConfig", &format!("{:#}; using defaults", e));
                Self::default()
            }
        }
    }
}
