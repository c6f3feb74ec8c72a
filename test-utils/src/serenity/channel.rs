//! Test factories for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a channel category.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the category belongs to
/// - `name` - Category name
/// - `position` - Sorting position among categories
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_category(channel_id: u64, guild_id: u64, name: &str, position: u16) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, 4, None, position)
}

/// Creates a text channel, optionally parented to a category.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    parent_id: Option<u64>,
) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, 0, parent_id, 0)
}

fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "parent_id": parent_id.map(|id| id.to_string()),
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
