//! Guild event handler.
//!
//! The `guild_create` event fires when a guild becomes available to the bot: on
//! startup for every guild the bot is in, when it joins a new guild, and after an
//! outage. The handler checks the guild's game channel setup so a moderator sees
//! a missing permission or a filling category in the logs before a game fails to
//! get its channel.

use serenity::all::{Context, Guild};

use crate::{
    config::ChannelSettings,
    model::{channel::CategoryCapacity, guild::GuildSnapshot},
    service::game_channel::{audit_categories, MAX_CHANNELS_PER_CATEGORY},
};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// Logs whether the bot can manage channels and the remaining capacity of every
/// configured game channel category.
///
/// # Arguments
/// - `settings` - Game channel settings
/// - `ctx` - Discord context, used for the bot's own user ID
/// - `guild` - Guild data from Discord including channels, roles and members
/// - `_is_new` - Whether this is a new guild join (unused, required by event handler signature)
pub async fn handle_guild_create(
    settings: &ChannelSettings,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let bot_user_id = ctx.cache.current_user().id;
    let snapshot = GuildSnapshot::from_guild(&guild, bot_user_id);

    tracing::debug!(
        "Guild create event: {} ({}) - {} categories, {} channels",
        guild.name,
        snapshot.guild_id,
        snapshot.categories.len(),
        snapshot.channels.len()
    );

    if !snapshot.can_manage_channels() {
        tracing::warn!(
            "Bot cannot manage channels in guild {} ({}), game channels will not be created",
            guild.name,
            snapshot.guild_id
        );
    }

    let report = audit_categories(settings, &snapshot);
    if report.is_empty() {
        tracing::debug!(
            "No game channel categories configured for guild {}",
            snapshot.guild_id
        );
        return;
    }

    for capacity in &report {
        match capacity {
            CategoryCapacity::Missing { category_id } => tracing::warn!(
                "Game channel category {} configured for guild {} does not exist",
                category_id,
                snapshot.guild_id
            ),
            CategoryCapacity::Available {
                category,
                channel_count,
            } => tracing::info!(
                "Game channel category {} - {} has {} of {} slots free",
                category.category_id,
                category.name,
                MAX_CHANNELS_PER_CATEGORY.saturating_sub(*channel_count),
                MAX_CHANNELS_PER_CATEGORY
            ),
        }
    }

    if !report.iter().any(CategoryCapacity::is_usable) {
        tracing::error!(
            "Every game channel category in guild {} is missing or full",
            snapshot.guild_id
        );
    }
}
