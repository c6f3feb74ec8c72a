//! Application configuration.
//!
//! Process-level settings (bot token, settings path) come from environment
//! variables. The per-guild game channel rules live in a TOML settings file so a
//! moderator can change category lists without a rebuild. The raw file format is
//! `SettingsFile`; it is resolved into `ChannelSettings`, the explicit value the
//! game channel service is built from.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{config::ConfigError, AppError};
use crate::model::channel::CategoryOverride;

const DEFAULT_SETTINGS_PATH: &str = "game_channels.toml";

pub struct Config {
    pub discord_bot_token: String,

    pub settings_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            settings_path: std::env::var("GAME_CHANNEL_SETTINGS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH)),
        })
    }
}

/// Game channel settings as written in the TOML settings file.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsFile {
    /// Known community names mapped to their guild ID
    #[serde(default)]
    pub communities: HashMap<String, u64>,

    /// Per-guild game channel category lists
    #[serde(default)]
    pub guilds: Vec<GuildSettingsEntry>,

    /// Category override rules, evaluated in order
    #[serde(default)]
    pub category_overrides: Vec<CategoryOverrideEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GuildSettingsEntry {
    pub guild_id: u64,

    /// Candidate category IDs for shared game channels, in order of preference
    #[serde(default)]
    pub game_channel_categories: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryOverrideEntry {
    pub name_prefix: String,

    /// Community the rule is restricted to; applies to every guild when absent
    #[serde(default)]
    pub community: Option<String>,

    pub category_id: u64,
}

/// Resolved game channel settings.
///
/// Passed explicitly into `GameChannelService`, there is no global lookup.
/// Community names are resolved to guild IDs while loading.
#[derive(Debug, Clone, Default)]
pub struct ChannelSettings {
    /// Guild ID → ordered candidate category IDs
    pub game_channel_categories: HashMap<u64, Vec<u64>>,
    /// Category override rules, evaluated in order
    pub category_overrides: Vec<CategoryOverride>,
}

impl ChannelSettings {
    /// Loads and resolves the settings file at `path`.
    ///
    /// # Returns
    /// - `Ok(ChannelSettings)` - Settings parsed and every community reference resolved
    /// - `Err(ConfigError::ReadSettings)` - File could not be read
    /// - `Err(ConfigError::ParseSettings)` - File is not valid settings TOML
    /// - `Err(ConfigError::UnknownCommunity)` - An override names an unregistered community
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;

        let file: SettingsFile =
            toml::from_str(&raw).map_err(|source| ConfigError::ParseSettings {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_file(file)
    }

    /// Resolves a parsed settings file, turning community names into guild IDs.
    pub fn from_file(file: SettingsFile) -> Result<Self, ConfigError> {
        let category_overrides = file
            .category_overrides
            .into_iter()
            .map(|entry| {
                let guild_id = match entry.community {
                    Some(community) => match file.communities.get(&community) {
                        Some(guild_id) => Some(*guild_id),
                        None => {
                            return Err(ConfigError::UnknownCommunity {
                                prefix: entry.name_prefix,
                                community,
                            })
                        }
                    },
                    None => None,
                };

                Ok(CategoryOverride {
                    name_prefix: entry.name_prefix,
                    guild_id,
                    category_id: entry.category_id,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let game_channel_categories = file
            .guilds
            .into_iter()
            .map(|guild| (guild.guild_id, guild.game_channel_categories))
            .collect();

        Ok(Self {
            game_channel_categories,
            category_overrides,
        })
    }

    /// Ordered candidate category IDs configured for a guild (empty if none).
    pub fn game_channel_categories(&self, guild_id: u64) -> &[u64] {
        self.game_channel_categories
            .get(&guild_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
