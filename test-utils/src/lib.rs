//! Game Channels Test Utils
//!
//! Provides shared testing utilities for the game channel crate. The crate offers
//! factories for Serenity model objects so tests can exercise code that reads
//! guild state without a live Discord connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_category, create_test_guild, create_test_member};
//!
//! #[test]
//! fn test_snapshot() {
//!     let category = create_test_category(10, 1, "ELO Games", 0);
//!     let bot = create_test_member(1, 500, "Game Bot", &[]);
//!     let guild = create_test_guild(1, "Test Guild", &[category], &[], &[bot]);
//!
//!     // Build snapshots from `guild`...
//! }
//! ```

pub mod serenity;
