//! Guild snapshot domain models.
//!
//! A `GuildSnapshot` is a read-only view of a guild taken from the platform
//! client. It is never refreshed by this crate; two games racing for the last slot
//! of a category can both see it as free.

use serenity::all::{ChannelType, Guild, Permissions, RoleId, UserId};

/// Read-only view of the guild state used by the game channel rules.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSnapshot {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// User ID of the bot itself.
    pub bot_user_id: u64,
    /// Effective guild-level permissions of the bot.
    pub bot_permissions: Permissions,
    /// Channel categories in the guild's native order.
    pub categories: Vec<CategorySnapshot>,
    /// Non-category channels.
    pub channels: Vec<ChannelSnapshot>,
    /// Known guild members.
    pub members: Vec<MemberSnapshot>,
}

/// Channel category within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySnapshot {
    pub category_id: u64,
    pub name: String,
    pub position: u16,
}

/// Channel within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSnapshot {
    pub channel_id: u64,
    pub name: String,
    /// Category the channel lives in, if any.
    pub parent_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberSnapshot {
    pub user_id: u64,
    pub display_name: String,
}

impl GuildSnapshot {
    /// Builds a snapshot from a serenity guild.
    ///
    /// The bot's effective permissions are the union of the `@everyone` role and
    /// every role of the bot member. Guild owners and administrators are granted
    /// all permissions, matching Discord's own resolution. Categories are ordered by
    /// position, then ID, which is how Discord lists them.
    ///
    /// # Arguments
    /// - `guild` - Guild from the serenity cache or gateway event
    /// - `bot_user_id` - User ID of the bot's own account
    ///
    /// # Returns
    /// - `GuildSnapshot` - Snapshot of the guild's categories, channels and members
    pub fn from_guild(guild: &Guild, bot_user_id: UserId) -> Self {
        let everyone = RoleId::new(guild.id.get());

        let mut bot_permissions = guild
            .roles
            .get(&everyone)
            .map(|role| role.permissions)
            .unwrap_or_else(Permissions::empty);

        if let Some(bot_member) = guild.members.get(&bot_user_id) {
            for role_id in &bot_member.roles {
                if let Some(role) = guild.roles.get(role_id) {
                    bot_permissions |= role.permissions;
                }
            }
        }

        if guild.owner_id == bot_user_id || bot_permissions.contains(Permissions::ADMINISTRATOR) {
            bot_permissions = Permissions::all();
        }

        let mut categories: Vec<CategorySnapshot> = guild
            .channels
            .values()
            .filter(|channel| channel.kind == ChannelType::Category)
            .map(|channel| CategorySnapshot {
                category_id: channel.id.get(),
                name: channel.name.clone(),
                position: channel.position,
            })
            .collect();
        categories.sort_by_key(|category| (category.position, category.category_id));

        let mut channels: Vec<ChannelSnapshot> = guild
            .channels
            .values()
            .filter(|channel| channel.kind != ChannelType::Category)
            .map(|channel| ChannelSnapshot {
                channel_id: channel.id.get(),
                name: channel.name.clone(),
                parent_id: channel.parent_id.map(|id| id.get()),
            })
            .collect();
        channels.sort_by_key(|channel| channel.channel_id);

        let mut members: Vec<MemberSnapshot> = guild
            .members
            .values()
            .map(|member| MemberSnapshot {
                user_id: member.user.id.get(),
                display_name: member.display_name().to_string(),
            })
            .collect();
        members.sort_by_key(|member| member.user_id);

        Self {
            guild_id: guild.id.get(),
            bot_user_id: bot_user_id.get(),
            bot_permissions,
            categories,
            channels,
            members,
        }
    }

    /// ID of the default `@everyone` role, which Discord gives the guild's own ID.
    pub fn default_role_id(&self) -> u64 {
        self.guild_id
    }

    /// Whether the bot may create, edit and delete channels in this guild.
    pub fn can_manage_channels(&self) -> bool {
        self.bot_permissions.contains(Permissions::MANAGE_CHANNELS)
            || self.bot_permissions.contains(Permissions::ADMINISTRATOR)
    }

    pub fn category(&self, category_id: u64) -> Option<&CategorySnapshot> {
        self.categories
            .iter()
            .find(|category| category.category_id == category_id)
    }

    pub fn channel(&self, channel_id: u64) -> Option<&ChannelSnapshot> {
        self.channels
            .iter()
            .find(|channel| channel.channel_id == channel_id)
    }

    pub fn member(&self, user_id: u64) -> Option<&MemberSnapshot> {
        self.members.iter().find(|member| member.user_id == user_id)
    }

    /// Number of channels currently parented to a category.
    pub fn channel_count_in(&self, category_id: u64) -> usize {
        self.channels
            .iter()
            .filter(|channel| channel.parent_id == Some(category_id))
            .count()
    }
}
