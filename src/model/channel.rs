//! Game channel domain models and operation parameters.

use serenity::all::Permissions;

use crate::model::guild::CategorySnapshot;

/// Where a game channel's category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// Category owned by the player's team; channel permissions sync from it.
    Team,
    /// Shared game category; the channel needs explicit per-player overwrites.
    SharedPool,
}

/// Result of choosing a category for a new game channel.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySelection {
    pub category: CategorySnapshot,
    pub scope: CategoryScope,
}

impl CategorySelection {
    pub fn is_team_category(&self) -> bool {
        self.scope == CategoryScope::Team
    }
}

/// Per-category capacity as reported by the category audit.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryCapacity {
    /// The configured category ID does not exist in the guild.
    Missing { category_id: u64 },
    /// The category exists; `channel_count` channels already live in it.
    Available {
        category: CategorySnapshot,
        channel_count: usize,
    },
}

impl CategoryCapacity {
    /// Whether a new channel can still be created in this category.
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Missing { .. } => false,
            Self::Available { channel_count, .. } => {
                *channel_count < crate::service::game_channel::MAX_CHANNELS_PER_CATEGORY
            }
        }
    }
}

/// Rule forcing games whose name starts with a prefix into a dedicated category.
///
/// Used for time-boxed events that need their own category; rules come from the
/// settings file so they can be added and retired without a code change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOverride {
    /// Case-insensitive game name prefix
    pub name_prefix: String,
    /// Guild the rule is limited to; `None` applies to every guild
    pub guild_id: Option<u64>,
    /// Category to use when the rule matches
    pub category_id: u64,
}

impl CategoryOverride {
    pub fn matches(&self, guild_id: u64, game_name: &str) -> bool {
        if self.guild_id.is_some_and(|id| id != guild_id) {
            return false;
        }

        let prefix = self.name_prefix.to_lowercase();
        game_name.to_lowercase().starts_with(&prefix)
    }
}

/// Target of a permission overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteTarget {
    Member(u64),
    Role(u64),
}

/// Channel-level permission overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOverwrite {
    pub target: OverwriteTarget,
    pub allow: Permissions,
    pub deny: Permissions,
}

/// Parameters for creating a game text channel.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameChannelParam {
    pub name: String,
    pub category_id: u64,
    /// Explicit overwrites; `None` lets the channel sync permissions from its category
    pub overwrites: Option<Vec<ChannelOverwrite>>,
    /// Audit log reason shown to guild moderators
    pub reason: String,
}
