use std::sync::Arc;

use crate::{
    config::{ChannelSettings, Config},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Log levels are read from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Loads the game channel settings file named by the configuration.
///
/// # Arguments
/// - `config` - Application configuration containing the settings path
///
/// # Returns
/// - `Ok(Arc<ChannelSettings>)` - Resolved settings, shareable with the bot handler
/// - `Err(AppError::ConfigErr)` - Settings file missing, malformed or inconsistent
pub fn load_channel_settings(config: &Config) -> Result<Arc<ChannelSettings>, AppError> {
    let settings = ChannelSettings::load(&config.settings_path)?;

    tracing::info!(
        "Loaded game channel settings from {}: {} guilds, {} category overrides",
        config.settings_path.display(),
        settings.game_channel_categories.len(),
        settings.category_overrides.len()
    );

    Ok(Arc::new(settings))
}
