use thiserror::Error;

/// Reasons no channel category can be selected for a game channel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryError {
    /// The bot lacks the manage channels permission in the guild.
    #[error("Bot is missing the manage channels permission in guild {guild_id}")]
    MissingManageChannels { guild_id: u64 },

    /// No team category matched and every configured game category is missing or full.
    #[error("No usable game channel category in guild {guild_id}")]
    NoneAvailable { guild_id: u64 },
}
