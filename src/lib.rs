//! Per-game Discord channel management.
//!
//! This crate manages the text channel a game is coordinated in: it derives a
//! deterministic channel name from the game, picks a category (the team's own or
//! a shared game category with room left), creates the channel with the right
//! permission overwrites, greets the players, and renames or deletes the channel
//! as the game changes.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - Naming, category and permission rules and the channel lifecycle
//! - **Platform** (`platform/`) - Narrow chat platform trait and its serenity implementation
//! - **Model Layer** (`model/`) - Games, players and guild snapshots
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment configuration and the TOML settings file
//! - **Startup** (`startup`) - Logging and settings initialization
//! - **Bot** (`bot/`) - Discord gateway client and event handlers
//!
//! # Usage
//!
//! ```rust,ignore
//! let platform = SerenityPlatform::new(client.http.clone(), client.cache.clone());
//! let service = GameChannelService::new(&platform, &settings);
//!
//! let guild = platform.guild_snapshot(guild_id).ok_or(...)?;
//! let channel = service
//!     .create_game_channel(&guild, &game, &players, Some("The Ronin"), false)
//!     .await?;
//! service.greet_game_channel(&channel, &rosters, &game, &players, false).await;
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod service;
pub mod startup;
