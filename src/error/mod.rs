//! Error types for game channel management.
//!
//! `AppError` is the top-level error returned by the fallible entry points of the
//! crate: configuration loading, bot start-up and game channel creation. Follow-up
//! operations (greeting, rename, delete, send) log their failures and never return
//! an error, so they have no variants here.

pub mod category;
pub mod config;
pub mod platform;

use thiserror::Error;

use crate::error::{category::CategoryError, config::ConfigError, platform::PlatformError};

/// Top-level application error type.
///
/// Aggregates the errors a caller has to handle. Most variants use `#[from]` for
/// automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or settings loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord client error from Serenity.
    ///
    /// Boxed due to large size. Only produced while building or running the bot
    /// client; channel operations go through `PlatformError` instead.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// No channel category could be selected for a new game channel.
    #[error(transparent)]
    CategoryErr(#[from] CategoryError),

    /// The chat platform rejected the creation of a game channel.
    ///
    /// The game has no venue without its channel, so the calling workflow must
    /// stop when it sees this.
    #[error("Failed to create game channel: {0}")]
    ChannelCreation(#[source] PlatformError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
