//! Test factory for creating Serenity Guild objects.
//!
//! The guild is created by deserializing JSON, simulating what Discord's API would
//! return, then populated with the given channels, roles and members.

use serenity::all::{Guild, GuildChannel, Member, Role};

/// Owner of every test guild; pick a different ID for the bot unless the test is
/// about owner permissions.
pub const TEST_GUILD_OWNER_ID: u64 = 100000000000000000;

/// Creates a test Serenity Guild with the given channels, roles and members.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `channels` - Channels and categories of the guild
/// - `roles` - Roles of the guild, including `@everyone` if the test needs it
/// - `members` - Members of the guild
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    channels: &[GuildChannel],
    roles: &[Role],
    members: &[Member],
) -> Guild {
    let mut guild: Guild = serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": TEST_GUILD_OWNER_ID.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": members.len(),
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure");

    for channel in channels {
        guild.channels.insert(channel.id, channel.clone());
    }
    for role in roles {
        guild.roles.insert(role.id, role.clone());
    }
    for member in members {
        guild.members.insert(member.user.id, member.clone());
    }

    guild
}
