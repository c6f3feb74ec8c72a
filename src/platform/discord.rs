//! Serenity-backed chat platform.

use serenity::{
    all::{
        ChannelId, ChannelType, CreateChannel, EditChannel, GuildId, PermissionOverwrite,
        PermissionOverwriteType, RoleId, UserId,
    },
    async_trait,
    cache::Cache,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::platform::PlatformError,
    model::{
        channel::{ChannelOverwrite, CreateGameChannelParam, OverwriteTarget},
        guild::{ChannelSnapshot, GuildSnapshot},
    },
    platform::ChatPlatform,
};

/// Chat platform backed by the serenity HTTP client and gateway cache.
///
/// Shares the client's `Http` and `Cache` rather than opening its own connection.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    /// Snapshot of a guild from the gateway cache.
    ///
    /// # Returns
    /// - `Some(GuildSnapshot)` - Guild is cached
    /// - `None` - Guild is not (yet) available in the cache
    pub fn guild_snapshot(&self, guild_id: u64) -> Option<GuildSnapshot> {
        let bot_user_id = self.cache.current_user().id;
        let guild = self.cache.guild(GuildId::new(guild_id))?;

        Some(GuildSnapshot::from_guild(&guild, bot_user_id))
    }
}

impl From<&ChannelOverwrite> for PermissionOverwrite {
    fn from(overwrite: &ChannelOverwrite) -> Self {
        let kind = match overwrite.target {
            OverwriteTarget::Member(user_id) => {
                PermissionOverwriteType::Member(UserId::new(user_id))
            }
            OverwriteTarget::Role(role_id) => PermissionOverwriteType::Role(RoleId::new(role_id)),
        };

        PermissionOverwrite {
            allow: overwrite.allow,
            deny: overwrite.deny,
            kind,
        }
    }
}

#[async_trait]
impl ChatPlatform for SerenityPlatform {
    async fn create_text_channel(
        &self,
        guild_id: u64,
        param: &CreateGameChannelParam,
    ) -> Result<ChannelSnapshot, PlatformError> {
        let mut builder = CreateChannel::new(param.name.as_str())
            .kind(ChannelType::Text)
            .category(ChannelId::new(param.category_id))
            .audit_log_reason(&param.reason);

        if let Some(overwrites) = &param.overwrites {
            builder = builder.permissions(overwrites.iter().map(PermissionOverwrite::from));
        }

        let channel = GuildId::new(guild_id)
            .create_channel(&self.http, builder)
            .await?;

        Ok(ChannelSnapshot {
            channel_id: channel.id.get(),
            name: channel.name,
            parent_id: channel.parent_id.map(|id| id.get()),
        })
    }

    async fn rename_channel(
        &self,
        channel_id: u64,
        name: &str,
        reason: &str,
    ) -> Result<(), PlatformError> {
        let builder = EditChannel::new().name(name).audit_log_reason(reason);

        ChannelId::new(channel_id)
            .edit(&self.http, builder)
            .await?;

        Ok(())
    }

    async fn delete_channel(&self, channel_id: u64, reason: &str) -> Result<(), PlatformError> {
        self.http
            .delete_channel(ChannelId::new(channel_id), Some(reason))
            .await?;

        Ok(())
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), PlatformError> {
        ChannelId::new(channel_id)
            .say(&self.http, content)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::Permissions;

    #[test]
    fn converts_member_overwrite() {
        let overwrite = ChannelOverwrite {
            target: OverwriteTarget::Member(42),
            allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
            deny: Permissions::empty(),
        };

        let converted = PermissionOverwrite::from(&overwrite);

        assert_eq!(converted.kind, PermissionOverwriteType::Member(UserId::new(42)));
        assert_eq!(
            converted.allow,
            Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES
        );
        assert!(converted.deny.is_empty());
    }

    #[test]
    fn converts_role_overwrite() {
        let overwrite = ChannelOverwrite {
            target: OverwriteTarget::Role(7),
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
        };

        let converted = PermissionOverwrite::from(&overwrite);

        assert_eq!(converted.kind, PermissionOverwriteType::Role(RoleId::new(7)));
        assert_eq!(converted.deny, Permissions::VIEW_CHANNEL);
    }
}
