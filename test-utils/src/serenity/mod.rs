//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Channel, Member) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `channel::create_test_category` - Create category channels
//! - `channel::create_test_text_channel` - Create text channels
//! - `member::create_test_member` - Create guild members
//! - `role::create_test_role` - Create Serenity Role objects

pub mod channel;
pub mod guild;
pub mod member;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::{create_test_category, create_test_text_channel};
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::create_test_role;
