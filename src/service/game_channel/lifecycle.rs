//! Operations on existing game channels.
//!
//! All of these are best-effort follow-ups to a game state change that already
//! happened elsewhere. A channel that is no longer in the guild (a moderator may
//! have removed it) is a warning, and platform failures are logged, never
//! returned.

use crate::{
    model::{game::UNNAMED_GAME, guild::GuildSnapshot},
    platform::ChatPlatform,
};

use super::{generate_channel_name, GameChannelService, DELETE_REASON, RENAME_REASON};

impl<'a, P: ChatPlatform> GameChannelService<'a, P> {
    /// Deletes a game channel once the game has concluded.
    pub async fn delete_game_channel(&self, guild: &GuildSnapshot, channel_id: u64) {
        let Some(channel) = guild.channel(channel_id) else {
            tracing::warn!(
                "Channel ID {} provided for deletion but it could not be loaded from guild {}",
                channel_id,
                guild.guild_id
            );
            return;
        };

        tracing::warn!("Deleting channel {}", channel.name);

        if let Err(e) = self
            .platform
            .delete_channel(channel_id, DELETE_REASON)
            .await
        {
            tracing::error!("Could not delete channel {}: {}", channel_id, e);
        }
    }

    /// Posts a plain message to a game channel.
    pub async fn send_message_to_channel(&self, guild: &GuildSnapshot, channel_id: u64, message: &str) {
        if guild.channel(channel_id).is_none() {
            tracing::warn!(
                "Channel ID {} provided for message but it could not be loaded from guild {}",
                channel_id,
                guild.guild_id
            );
            return;
        }

        if let Err(e) = self.platform.send_message(channel_id, message).await {
            tracing::error!("Could not send message to channel {}: {}", channel_id, e);
        }
    }

    /// Renames a game channel after the game itself was renamed.
    ///
    /// Nothing is sent when the regenerated name matches the current one
    /// (case-insensitive). After a successful rename a notice is posted to the
    /// channel; when the rename fails the failure is logged and no notice is
    /// posted, so players never read about a rename that did not happen.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild holding the channel
    /// - `channel_id` - Channel to rename
    /// - `game_id` - Game ID
    /// - `game_name` - New game name
    /// - `team_name` - Team the channel is for, `None` for a whole-game channel
    pub async fn update_game_channel_name(
        &self,
        guild: &GuildSnapshot,
        channel_id: u64,
        game_id: i64,
        game_name: Option<&str>,
        team_name: Option<&str>,
    ) {
        let Some(channel) = guild.channel(channel_id) else {
            tracing::warn!(
                "Channel ID {} provided for update but it could not be loaded from guild {}",
                channel_id,
                guild.guild_id
            );
            return;
        };

        let name = generate_channel_name(game_id, game_name, team_name);

        if name.to_lowercase() == channel.name.to_lowercase() {
            tracing::debug!(
                "Newly-generated channel name for channel {} game {} is the same - no change to channel",
                channel_id,
                game_id
            );
            return;
        }

        if let Err(e) = self
            .platform
            .rename_channel(channel_id, &name, RENAME_REASON)
            .await
        {
            tracing::error!(
                "Could not rename channel {} for game {}: {}",
                channel_id,
                game_id,
                e
            );
            return;
        }

        tracing::info!("Renamed channel for game {} to {}", game_id, name);

        let notice = format!(
            "This game has been renamed to *{}*.",
            game_name.filter(|name| !name.is_empty()).unwrap_or(UNNAMED_GAME)
        );
        if let Err(e) = self.platform.send_message(channel_id, &notice).await {
            tracing::error!("Could not send rename notice to channel {}: {}", channel_id, e);
        }
    }
}
