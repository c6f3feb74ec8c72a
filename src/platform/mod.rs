//! Chat platform boundary.
//!
//! The game channel service only needs four remote operations from Discord. They
//! are collected in the `ChatPlatform` trait so the service can be driven by
//! serenity in production and by a recording double in tests. Guild reads are not
//! part of the trait; callers pass a `GuildSnapshot` instead.

pub mod discord;

#[cfg(test)]
pub mod recording;

use serenity::async_trait;

use crate::{
    error::platform::PlatformError,
    model::{channel::CreateGameChannelParam, guild::ChannelSnapshot},
};

pub use discord::SerenityPlatform;

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Creates a text channel in a guild and returns the created channel.
    async fn create_text_channel(
        &self,
        guild_id: u64,
        param: &CreateGameChannelParam,
    ) -> Result<ChannelSnapshot, PlatformError>;

    /// Renames a channel, recording `reason` in the audit log.
    async fn rename_channel(
        &self,
        channel_id: u64,
        name: &str,
        reason: &str,
    ) -> Result<(), PlatformError>;

    /// Deletes a channel, recording `reason` in the audit log.
    async fn delete_channel(&self, channel_id: u64, reason: &str) -> Result<(), PlatformError>;

    /// Posts a plain text message to a channel.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), PlatformError>;
}
