use crate::core::{PricingError, Result};
use serde::Deserialize;
use std::env;

pub mod pricing;

pub use pricing::PricingConfig;

/// Main engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid LOG_FORMAT: {}", s)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()
                    .map_err(PricingError::Configuration)?,
            },
            pricing: PricingConfig::from_env()?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.log_level.trim().is_empty() {
            return Err(PricingError::Configuration(
                "LOG_LEVEL must not be empty".to_string(),
            ));
        }

        self.pricing.validate()
    }
}
