//! Domain models and parameter types.
//!
//! Games and players are supplied by the game-management side of the bot and are
//! read-only here. Guild state is captured in a `GuildSnapshot`, a narrow copy of
//! the parts of a Discord guild the channel rules look at, so the rules can run
//! against a test double as easily as against serenity's cache.

pub mod channel;
pub mod game;
pub mod guild;
