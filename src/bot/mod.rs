//! Discord bot integration.
//!
//! The bot connects to the gateway so serenity's cache holds the guild state the
//! game channel rules read (categories, channels, members, roles). The client's
//! `Http` and `Cache` are shared with `SerenityPlatform` rather than opening a
//! second connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild, channel and role events to keep the cache current
//! - `GUILD_MEMBERS` - Receive member events so players resolve to members (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
