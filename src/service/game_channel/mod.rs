//! Game channel service for per-game Discord channels.
//!
//! This module provides the `GameChannelService` which manages the text channel a
//! game is played out in: it picks a category, creates the channel with the right
//! permissions, greets the players, and later renames or deletes the channel as the
//! game changes. The caller stores the created channel ID against its game record;
//! nothing is persisted here.
//!
//! The service is organized into separate modules by concern:
//! - `name` - Deterministic channel name generation
//! - `category` - Category selection and capacity audit
//! - `creation` - Channel creation and permission overwrites
//! - `greeting` - Greeting message composition and posting
//! - `lifecycle` - Rename, delete and plain messages for existing channels

pub mod category;
pub mod creation;
pub mod greeting;
pub mod lifecycle;
pub mod name;

#[cfg(test)]
mod test;

pub use category::audit_categories;
pub use name::generate_channel_name;

use crate::{config::ChannelSettings, platform::ChatPlatform};

/// Discord's limit on channels in one category.
pub const MAX_CHANNELS_PER_CATEGORY: usize = 50;

/// Audit log reason for new game channels.
pub const CREATE_REASON: &str = "ELO Game chan";
/// Audit log reason for renamed game channels.
pub const RENAME_REASON: &str = "Game renamed";
/// Audit log reason for deleted game channels.
pub const DELETE_REASON: &str = "Game concluded";

/// Service providing game channel operations against a chat platform.
///
/// Holds the resolved channel settings and the platform used for remote calls.
/// Guild state is passed into each operation as a `GuildSnapshot`; the service does
/// not cache it. No operation retries: a failed platform call is reported or
/// logged exactly once.
pub struct GameChannelService<'a, P: ChatPlatform> {
    platform: &'a P,
    settings: &'a ChannelSettings,
}

impl<'a, P: ChatPlatform> GameChannelService<'a, P> {
    /// Creates a new GameChannelService instance.
    ///
    /// # Arguments
    /// - `platform` - Chat platform used for channel and message calls
    /// - `settings` - Resolved game channel settings (category lists, overrides)
    pub fn new(platform: &'a P, settings: &'a ChannelSettings) -> Self {
        Self { platform, settings }
    }
}
