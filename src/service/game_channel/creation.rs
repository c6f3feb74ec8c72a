//! Game channel creation.

use serenity::all::Permissions;

use crate::{
    error::AppError,
    model::{
        channel::{ChannelOverwrite, CreateGameChannelParam, OverwriteTarget},
        game::{Game, Player},
        guild::{ChannelSnapshot, GuildSnapshot},
    },
    platform::ChatPlatform,
};

use super::{generate_channel_name, GameChannelService, CREATE_REASON};

/// Permissions granted to every participant of a game in a shared category.
pub fn participant_permissions() -> Permissions {
    Permissions::VIEW_CHANNEL
        | Permissions::ADD_REACTIONS
        | Permissions::SEND_MESSAGES
        | Permissions::ATTACH_FILES
        | Permissions::MANAGE_MESSAGES
}

impl<'a, P: ChatPlatform> GameChannelService<'a, P> {
    /// Creates the text channel for a game.
    ///
    /// Picks a category with `get_channel_category`, then applies the configured
    /// category overrides. Channels in a team category, or for games played on a
    /// team's own server, sync their permissions from the category. Channels in a
    /// shared category are hidden from `@everyone` and opened up to the players
    /// and the bot only.
    ///
    /// A category failure or a platform rejection is returned to the caller; there
    /// is no retry and nothing to roll back.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild to create the channel in
    /// - `game` - Game the channel is for
    /// - `players` - Players who take part through this channel
    /// - `team_name` - Team the channel is for, `None` for a whole-game channel
    /// - `using_team_server` - Game is hosted on a team-owned server
    ///
    /// # Returns
    /// - `Ok(ChannelSnapshot)` - The created channel; the caller stores its ID
    /// - `Err(AppError::CategoryErr)` - No category could be selected
    /// - `Err(AppError::ChannelCreation)` - Discord rejected the channel
    pub async fn create_game_channel(
        &self,
        guild: &GuildSnapshot,
        game: &Game,
        players: &[Player],
        team_name: Option<&str>,
        using_team_server: bool,
    ) -> Result<ChannelSnapshot, AppError> {
        let selection = self.get_channel_category(guild, team_name).map_err(|e| {
            tracing::error!(
                "Cannot create channel for game {} due to missing category: {}",
                game.id,
                e
            );
            e
        })?;
        let selection = self.apply_category_override(guild, game.display_name(), selection);

        let name = generate_channel_name(game.id, game.name.as_deref(), team_name);

        let overwrites = if selection.is_team_category() || using_team_server {
            // Permissions sync from the category
            None
        } else {
            Some(participant_overwrites(guild, players))
        };

        let param = CreateGameChannelParam {
            name,
            category_id: selection.category.category_id,
            overwrites,
            reason: CREATE_REASON.to_string(),
        };

        let channel = self
            .platform
            .create_text_channel(guild.guild_id, &param)
            .await
            .map_err(|e| {
                tracing::error!("Exception in create_game_channel for game {}: {}", game.id, e);
                AppError::ChannelCreation(e)
            })?;

        tracing::debug!(
            "Created channel {} ({}) for game {} in category {}",
            channel.name,
            channel.channel_id,
            game.id,
            selection.category.name
        );

        Ok(channel)
    }
}

/// Builds the overwrites for a channel in a shared category.
///
/// Every player that is a member of the guild, plus the bot itself, gets
/// `participant_permissions`; `@everyone` is denied viewing. Players who cannot be
/// resolved to a guild member are left out with a warning. Each member appears
/// once, in player order with the bot last.
pub fn participant_overwrites(guild: &GuildSnapshot, players: &[Player]) -> Vec<ChannelOverwrite> {
    let mut member_ids: Vec<u64> = Vec::with_capacity(players.len() + 1);

    for player in players {
        let Some(member) = guild.member(player.discord_id) else {
            tracing::warn!(
                "Player {} is not a member of guild {}, skipping channel permissions",
                player.discord_id,
                guild.guild_id
            );
            continue;
        };
        if !member_ids.contains(&member.user_id) {
            tracing::debug!(
                "Granting game channel access to {} ({})",
                member.display_name,
                member.user_id
            );
            member_ids.push(member.user_id);
        }
    }

    if !member_ids.contains(&guild.bot_user_id) {
        member_ids.push(guild.bot_user_id);
    }

    let mut overwrites: Vec<ChannelOverwrite> = member_ids
        .into_iter()
        .map(|user_id| ChannelOverwrite {
            target: OverwriteTarget::Member(user_id),
            allow: participant_permissions(),
            deny: Permissions::empty(),
        })
        .collect();

    overwrites.push(ChannelOverwrite {
        target: OverwriteTarget::Role(guild.default_role_id()),
        allow: Permissions::empty(),
        deny: Permissions::VIEW_CHANNEL,
    });

    overwrites
}
