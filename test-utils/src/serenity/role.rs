//! Test factory for creating Serenity Role objects.

use serenity::all::{Permissions, Role};

/// Creates a test Serenity Role with customizable fields.
///
/// All other fields are set to reasonable defaults (no color, not hoisted, not
/// managed, not mentionable).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake); use the guild ID for `@everyone`
/// - `name` - Role name
/// - `permissions` - Guild-level permissions granted by the role
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, permissions: Permissions, position: i16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.bits().to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
