//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use serde::{Deserialize, Serialize};

/// Environment variable carrying the Bot API token
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Prefix for environment overrides, e.g. `GROUPKEEPER__LOGGING__LEVEL`
pub const ENV_PREFIX: &str = "GROUPKEEPER";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for a daily-rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

/// Content filter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    pub denylist: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            denylist: vec!["badword1".to_string(), "badword2".to_string()],
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// The token is always taken from `TELEGRAM_BOT_TOKEN`; a missing token
    /// is reported as a configuration error.
    pub fn new() -> Result<Self, crate::utils::errors::GroupKeeperError> {
        Self::from_file("config")
    }

    /// Load settings using `path` as the optional configuration file
    pub fn from_file(path: &str) -> Result<Self, crate::utils::errors::GroupKeeperError> {
        let token = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.trim().is_empty());
        let Some(token) = token else {
            return Err(crate::utils::errors::GroupKeeperError::Config(format!(
                "{} environment variable not set",
                TOKEN_ENV_VAR
            )));
        };

        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("logging.level", defaults.logging.level)?
            .set_default("filter.denylist", defaults.filter.denylist)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("filter.denylist")
                    .try_parsing(true),
            )
            .set_override("bot.token", token)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::GroupKeeperError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            logging: LoggingConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}
