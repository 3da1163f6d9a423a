use std::str::FromStr;

use log::LevelFilter;
use web_sys::Element;

use crate::error::ConfigError;

/// Id of the element the app mounts into, see `index.html`.
pub const DEFAULT_ROOT_ID: &str = "app";

/// Attribute on the mount element that overrides the console log level.
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Reads overrides from the mount element's data attributes.
    pub fn from_root(root: &Element) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = root.get_attribute(LOG_LEVEL_ATTR) {
            config.log_level = parse_log_level(&raw)?;
        }
        Ok(config)
    }
}

pub fn parse_log_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}
