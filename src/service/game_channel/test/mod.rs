use serenity::all::Permissions;

use crate::{
    config::ChannelSettings,
    model::{
        channel::CategoryOverride,
        game::{Game, GameHost, Player},
        guild::{CategorySnapshot, ChannelSnapshot, GuildSnapshot, MemberSnapshot},
    },
    platform::recording::{forbidden, PlatformCall, RecordingPlatform},
    service::game_channel::GameChannelService,
};

mod category;

const GUILD_ID: u64 = 447883341463814144;
const BOT_ID: u64 = 500000000000000001;
const TEAM_CATEGORY_ID: u64 = 10;
const GAMES_CATEGORY_ID: u64 = 20;
const OVERFLOW_CATEGORY_ID: u64 = 21;
const EVENT_CATEGORY_ID: u64 = 30;
const PLAYER_IDS: [u64; 3] = [1001, 1002, 1003];

fn category(category_id: u64, name: &str, position: u16) -> CategorySnapshot {
    CategorySnapshot {
        category_id,
        name: name.to_string(),
        position,
    }
}

/// Guild with a team category, two shared game categories and an event category.
///
/// The bot can manage channels and every player in `PLAYER_IDS` is a member.
fn guild() -> GuildSnapshot {
    let mut members: Vec<MemberSnapshot> = PLAYER_IDS
        .iter()
        .map(|&user_id| MemberSnapshot {
            user_id,
            display_name: format!("Player {}", user_id),
        })
        .collect();
    members.push(MemberSnapshot {
        user_id: BOT_ID,
        display_name: "Game Bot".to_string(),
    });

    GuildSnapshot {
        guild_id: GUILD_ID,
        bot_user_id: BOT_ID,
        bot_permissions: Permissions::MANAGE_CHANNELS | Permissions::SEND_MESSAGES,
        categories: vec![
            category(TEAM_CATEGORY_ID, "Ronin Games", 0),
            category(GAMES_CATEGORY_ID, "ELO Games", 1),
            category(OVERFLOW_CATEGORY_ID, "ELO Games 2", 2),
            category(EVENT_CATEGORY_ID, "WWN Event", 3),
        ],
        channels: vec![],
        members,
    }
}

/// Adds `count` channels to a category of the guild.
fn fill_category(guild: &mut GuildSnapshot, category_id: u64, count: usize) {
    let start = guild.channels.len() as u64;
    for i in 0..count as u64 {
        guild.channels.push(ChannelSnapshot {
            channel_id: category_id * 1000 + start + i,
            name: format!("e{}-filler", start + i),
            parent_id: Some(category_id),
        });
    }
}

/// Settings listing the two shared game categories for the test guild.
fn settings() -> ChannelSettings {
    let mut settings = ChannelSettings::default();
    settings
        .game_channel_categories
        .insert(GUILD_ID, vec![GAMES_CATEGORY_ID, OVERFLOW_CATEGORY_ID]);
    settings
}

/// Settings with the WWN event override on top of `settings()`.
fn settings_with_event_override() -> ChannelSettings {
    let mut settings = settings();
    settings.category_overrides.push(CategoryOverride {
        name_prefix: "WWN".to_string(),
        guild_id: Some(GUILD_ID),
        category_id: EVENT_CATEGORY_ID,
    });
    settings
}

fn game(id: i64, name: &str) -> Game {
    Game {
        id,
        name: Some(name.to_string()),
        host: None,
        notes: None,
    }
}

fn players() -> Vec<Player> {
    PLAYER_IDS.iter().map(|&id| Player::new(id)).collect()
}
