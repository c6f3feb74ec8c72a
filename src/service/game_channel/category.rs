//! Channel category selection.
//!
//! A team channel goes into the team's own category when the guild has one (a
//! category whose name contains the team name). Everything else goes into the
//! first configured game category that exists and still has room.

use crate::{
    config::ChannelSettings,
    error::category::CategoryError,
    model::{
        channel::{CategoryCapacity, CategoryScope, CategorySelection},
        guild::GuildSnapshot,
    },
    platform::ChatPlatform,
};

use super::{GameChannelService, MAX_CHANNELS_PER_CATEGORY};

impl<'a, P: ChatPlatform> GameChannelService<'a, P> {
    /// Selects the category a new game channel should be created in.
    ///
    /// With a team name, the guild's categories are scanned in their native order
    /// for a name containing the normalized team name (case-insensitive); the
    /// first match is a team category. Otherwise the guild's configured game
    /// categories are tried in order, skipping any that cannot be found or already
    /// hold `MAX_CHANNELS_PER_CATEGORY` channels.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild the channel will live in
    /// - `team_name` - Team the channel is for, if any
    ///
    /// # Returns
    /// - `Ok(CategorySelection)` - Chosen category and whether it is team-specific
    /// - `Err(CategoryError::MissingManageChannels)` - Bot cannot manage channels
    /// - `Err(CategoryError::NoneAvailable)` - No team category and no usable game category
    pub fn get_channel_category(
        &self,
        guild: &GuildSnapshot,
        team_name: Option<&str>,
    ) -> Result<CategorySelection, CategoryError> {
        if !guild.can_manage_channels() {
            tracing::error!(
                "manage_channels permission is missing in guild {}",
                guild.guild_id
            );
            return Err(CategoryError::MissingManageChannels {
                guild_id: guild.guild_id,
            });
        }

        if let Some(team) = team_name.map(normalize_team_name).filter(|t| !t.is_empty()) {
            if let Some(category) = guild
                .categories
                .iter()
                .find(|category| category.name.to_lowercase().contains(&team))
            {
                tracing::debug!(
                    "Using {} - {} as a team channel category",
                    category.category_id,
                    category.name
                );
                return Ok(CategorySelection {
                    category: category.clone(),
                    scope: CategoryScope::Team,
                });
            }
        }

        // No team category, use the shared game categories
        for capacity in audit_categories(self.settings, guild) {
            match capacity {
                CategoryCapacity::Missing { category_id } => {
                    tracing::warn!(
                        "Game channel category {} is configured for guild {} but cannot be loaded",
                        category_id,
                        guild.guild_id
                    );
                }
                CategoryCapacity::Available {
                    category,
                    channel_count,
                } if channel_count >= MAX_CHANNELS_PER_CATEGORY => {
                    tracing::warn!(
                        "Game channel category {} - {} is configured but is full ({} channels)",
                        category.category_id,
                        category.name,
                        channel_count
                    );
                }
                CategoryCapacity::Available { category, .. } => {
                    tracing::debug!(
                        "Using {} - {} for game channel category",
                        category.category_id,
                        category.name
                    );
                    return Ok(CategorySelection {
                        category,
                        scope: CategoryScope::SharedPool,
                    });
                }
            }
        }

        tracing::error!(
            "Could not find a usable game channel category in guild {}",
            guild.guild_id
        );
        Err(CategoryError::NoneAvailable {
            guild_id: guild.guild_id,
        })
    }

    /// Applies the configured category overrides to a selection.
    ///
    /// The first rule that matches the guild and game name and whose category
    /// exists in the guild wins, producing a shared-pool selection. Rules pointing
    /// at a missing category are skipped.
    pub fn apply_category_override(
        &self,
        guild: &GuildSnapshot,
        game_name: &str,
        selection: CategorySelection,
    ) -> CategorySelection {
        for rule in &self.settings.category_overrides {
            if !rule.matches(guild.guild_id, game_name) {
                continue;
            }

            match guild.category(rule.category_id) {
                Some(category) => {
                    tracing::debug!(
                        "Game '{}' matches override '{}', using category {} - {}",
                        game_name,
                        rule.name_prefix,
                        category.category_id,
                        category.name
                    );
                    return CategorySelection {
                        category: category.clone(),
                        scope: CategoryScope::SharedPool,
                    };
                }
                None => {
                    tracing::warn!(
                        "Override category {} for prefix '{}' cannot be loaded in guild {}",
                        rule.category_id,
                        rule.name_prefix,
                        guild.guild_id
                    );
                }
            }
        }

        selection
    }
}

/// Reports the state of every game category configured for a guild.
///
/// Entries are returned in configuration order, one per configured ID. Only the
/// snapshot is read, no platform call is made.
pub fn audit_categories(settings: &ChannelSettings, guild: &GuildSnapshot) -> Vec<CategoryCapacity> {
    settings
        .game_channel_categories(guild.guild_id)
        .iter()
        .map(|&category_id| match guild.category(category_id) {
            Some(category) => CategoryCapacity::Available {
                category: category.clone(),
                channel_count: guild.channel_count_in(category_id),
            },
            None => CategoryCapacity::Missing { category_id },
        })
        .collect()
}

/// Normalizes a team name for category matching: "The Ronin " becomes "ronin".
///
/// Only a leading "the" word is removed. "the" inside a word is kept, so
/// "Brothers" stays "brothers" and still matches a "Brothers Games" category.
fn normalize_team_name(team_name: &str) -> String {
    let lowered = team_name.trim().to_lowercase();
    let stripped = if lowered == "the" {
        ""
    } else {
        lowered.strip_prefix("the ").unwrap_or(&lowered)
    };

    stripped.trim().to_string()
}
