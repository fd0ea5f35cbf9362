use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::error::{PricingError, Result};
use crate::config::{AppConfig, LogFormat};

/// Install the global tracing subscriber for the host application
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this
/// crate. Fails if a global subscriber is already installed.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("promo_pricing={}", config.log_level).into());

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .flatten_event(true),
            )
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    result.map_err(|e| PricingError::Configuration(format!("Tracing init failed: {}", e)))?;

    tracing::info!(
        "Pricing engine tracing initialized (env: {}, level: {})",
        config.env,
        config.log_level
    );

    Ok(())
}
