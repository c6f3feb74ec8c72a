//! Business logic for game channels.
//!
//! Services sit between the bot/game-management callers and the chat platform.
//! They own the naming, category and permission rules and decide which platform
//! failures reach the caller and which are only logged.

pub mod game_channel;
