//! Configuration System
//!
//! Settings come from built-in defaults, an optional TOML document and then
//! key/value overrides. Natively the overrides are environment variables; the
//! browser frontend feeds them from `localStorage`.

use serde::Deserialize;

/// Override key for `api.base_url`
pub const ENV_API_URL: &str = "MARKETPLACE_API_URL";
/// Override key for `api.token`
pub const ENV_API_TOKEN: &str = "MARKETPLACE_API_TOKEN";
/// Override key for `api.recommendation_limit`
pub const ENV_RECOMMENDATION_LIMIT: &str = "MARKETPLACE_RECOMMENDATION_LIMIT";
/// Override key for `display.locale`
pub const ENV_LOCALE: &str = "MARKETPLACE_LOCALE";
/// Override key for `logging.level`
pub const ENV_LOG_LEVEL: &str = "MARKETPLACE_LOG_LEVEL";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Marketplace API connection settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static bearer credential sent with every request
    #[serde(default = "default_token")]
    pub token: String,

    /// Recommendations requested per product; server default when unset
    #[serde(default)]
    pub recommendation_limit: Option<u32>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_token() -> String {
    "test-token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: default_token(),
            recommendation_limit: None,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// BCP-47 tag used for number grouping
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `marketplace_dashboard=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse a TOML document; missing sections and keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from any key/value source.
    ///
    /// Empty values are ignored, as is a recommendation limit that is not a
    /// positive integer.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = value(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(token) = value(ENV_API_TOKEN) {
            self.api.token = token;
        }
        if let Some(limit) = value(ENV_RECOMMENDATION_LIMIT) {
            match limit.trim().parse::<u32>() {
                Ok(n) if n > 0 => self.api.recommendation_limit = Some(n),
                _ => tracing::warn!(value = %limit, "Ignoring invalid recommendation limit"),
            }
        }
        if let Some(locale) = value(ENV_LOCALE) {
            self.display.locale = locale;
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        *self = std::mem::take(self).normalized();
    }

    /// Check that the API base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", self.api.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidBaseUrl(format!(
                "{}: unsupported scheme {}",
                self.api.base_url, other
            ))),
        }
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api.base_url.trim().trim_end_matches('/');
        self.api.base_url = trimmed.to_string();
        self
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid API base URL {0}")]
    InvalidBaseUrl(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Marketplace Dashboard Configuration
#
# Overrides (environment variables natively, localStorage in the browser):
# - MARKETPLACE_API_URL
# - MARKETPLACE_API_TOKEN
# - MARKETPLACE_RECOMMENDATION_LIMIT
# - MARKETPLACE_LOCALE
# - MARKETPLACE_LOG_LEVEL

[api]
# Marketplace analysis API
base_url = "http://localhost:8000"

# Bearer token sent with every request
token = "test-token"

# Recommendations per product (server default is 5)
# recommendation_limit = 5

[display]
# Number formatting locale
locale = "en-US"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}
