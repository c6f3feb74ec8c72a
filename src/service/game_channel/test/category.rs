use super::*;

use crate::{
    error::category::CategoryError,
    model::channel::{CategoryCapacity, CategoryScope},
    service::game_channel::{audit_categories, MAX_CHANNELS_PER_CATEGORY},
};

/// Tests that a missing manage channels permission fails without panicking.
///
/// Expected: Err(MissingManageChannels)
#[test]
fn fails_without_manage_channels_permission() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);
    let mut guild = guild();
    guild.bot_permissions = Permissions::SEND_MESSAGES;

    let result = service.get_channel_category(&guild, Some("Ronin"));

    assert_eq!(
        result,
        Err(CategoryError::MissingManageChannels { guild_id: GUILD_ID })
    );
}

/// Tests that administrators count as able to manage channels.
///
/// Expected: Ok with the first shared category
#[test]
fn administrator_can_manage_channels() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);
    let mut guild = guild();
    guild.bot_permissions = Permissions::ADMINISTRATOR;

    let selection = service.get_channel_category(&guild, None).unwrap();

    assert_eq!(selection.category.category_id, GAMES_CATEGORY_ID);
}

/// Tests that a team name selects the team's own category.
///
/// Verifies "The Ronin" is normalized to "ronin" and matched case-insensitively
/// against "Ronin Games".
///
/// Expected: Ok with team scope
#[test]
fn selects_team_category() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);

    let selection = service
        .get_channel_category(&guild(), Some("The Ronin"))
        .unwrap();

    assert_eq!(selection.category.category_id, TEAM_CATEGORY_ID);
    assert_eq!(selection.scope, CategoryScope::Team);
    assert!(selection.is_team_category());
}

/// Tests that the first matching category in guild order wins.
///
/// Expected: the category with the lower position
#[test]
fn first_team_match_wins() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);
    let mut guild = guild();
    guild.categories.push(category(40, "Ronin Archive", 9));

    let selection = service.get_channel_category(&guild, Some("ronin")).unwrap();

    assert_eq!(selection.category.category_id, TEAM_CATEGORY_ID);
}

/// Tests that an unknown team falls back to the shared game categories.
///
/// Expected: Ok with shared-pool scope
#[test]
fn falls_back_to_shared_category_for_unknown_team() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);

    let selection = service
        .get_channel_category(&guild(), Some("Sparkies"))
        .unwrap();

    assert_eq!(selection.category.category_id, GAMES_CATEGORY_ID);
    assert_eq!(selection.scope, CategoryScope::SharedPool);
}

/// Tests that a team name of only "The" does not match every category.
///
/// Expected: Ok with shared-pool scope
#[test]
fn bare_article_team_name_is_ignored() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);

    let selection = service.get_channel_category(&guild(), Some("The")).unwrap();

    assert_eq!(selection.scope, CategoryScope::SharedPool);
}

/// Tests that a full category is skipped for the next configured one.
///
/// Expected: Ok with the overflow category
#[test]
fn skips_full_category() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);
    let mut guild = guild();
    fill_category(&mut guild, GAMES_CATEGORY_ID, MAX_CHANNELS_PER_CATEGORY);

    let selection = service.get_channel_category(&guild, None).unwrap();

    assert_eq!(selection.category.category_id, OVERFLOW_CATEGORY_ID);
}

/// Tests that a category one below the limit is still used.
///
/// Expected: Ok with the first configured category
#[test]
fn uses_category_below_limit() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);
    let mut guild = guild();
    fill_category(&mut guild, GAMES_CATEGORY_ID, MAX_CHANNELS_PER_CATEGORY - 1);

    let selection = service.get_channel_category(&guild, None).unwrap();

    assert_eq!(selection.category.category_id, GAMES_CATEGORY_ID);
}

/// Tests that a configured category missing from the guild is skipped.
///
/// Expected: Ok with the next configured category
#[test]
fn skips_unresolvable_category() {
    let platform = RecordingPlatform::new();
    let mut settings = settings();
    settings
        .game_channel_categories
        .insert(GUILD_ID, vec![999, OVERFLOW_CATEGORY_ID]);
    let service = GameChannelService::new(&platform, &settings);

    let selection = service.get_channel_category(&guild(), None).unwrap();

    assert_eq!(selection.category.category_id, OVERFLOW_CATEGORY_ID);
}

/// Tests that full and missing categories together leave nothing to use.
///
/// Expected: Err(NoneAvailable)
#[test]
fn fails_when_all_categories_full_or_missing() {
    let platform = RecordingPlatform::new();
    let mut settings = settings();
    settings
        .game_channel_categories
        .insert(GUILD_ID, vec![GAMES_CATEGORY_ID, 999]);
    let service = GameChannelService::new(&platform, &settings);
    let mut guild = guild();
    fill_category(&mut guild, GAMES_CATEGORY_ID, MAX_CHANNELS_PER_CATEGORY + 3);

    let result = service.get_channel_category(&guild, None);

    assert_eq!(result, Err(CategoryError::NoneAvailable { guild_id: GUILD_ID }));
}

/// Tests that a guild without configured categories has nothing to use.
///
/// Expected: Err(NoneAvailable)
#[test]
fn fails_for_unconfigured_guild() {
    let platform = RecordingPlatform::new();
    let settings = ChannelSettings::default();
    let service = GameChannelService::new(&platform, &settings);

    let result = service.get_channel_category(&guild(), None);

    assert_eq!(result, Err(CategoryError::NoneAvailable { guild_id: GUILD_ID }));
}

/// Tests the category audit report.
///
/// Expected: one entry per configured ID in order, with channel counts
#[test]
fn audits_configured_categories() {
    let mut settings = settings();
    settings
        .game_channel_categories
        .insert(GUILD_ID, vec![GAMES_CATEGORY_ID, 999]);
    let mut guild = guild();
    fill_category(&mut guild, GAMES_CATEGORY_ID, 4);

    let report = audit_categories(&settings, &guild);

    assert_eq!(
        report,
        vec![
            CategoryCapacity::Available {
                category: category(GAMES_CATEGORY_ID, "ELO Games", 1),
                channel_count: 4,
            },
            CategoryCapacity::Missing { category_id: 999 },
        ]
    );
    assert!(report[0].is_usable());
    assert!(!report[1].is_usable());
}

/// Tests that a matching override replaces the selection.
///
/// Expected: event category with shared-pool scope
#[test]
fn override_replaces_selection() {
    let platform = RecordingPlatform::new();
    let settings = settings_with_event_override();
    let service = GameChannelService::new(&platform, &settings);
    let guild = guild();
    let selection = service
        .get_channel_category(&guild, Some("Ronin"))
        .unwrap();

    let selection = service.apply_category_override(&guild, "wwn Clash", selection);

    assert_eq!(selection.category.category_id, EVENT_CATEGORY_ID);
    assert_eq!(selection.scope, CategoryScope::SharedPool);
}

/// Tests that an override limited to another guild does not apply.
///
/// Expected: selection unchanged
#[test]
fn override_ignores_other_guilds() {
    let platform = RecordingPlatform::new();
    let mut settings = settings_with_event_override();
    settings.category_overrides[0].guild_id = Some(1);
    let service = GameChannelService::new(&platform, &settings);
    let guild = guild();
    let selection = service.get_channel_category(&guild, None).unwrap();

    let result = service.apply_category_override(&guild, "WWN Clash", selection.clone());

    assert_eq!(result, selection);
}

/// Tests that an override pointing at a missing category is skipped.
///
/// Expected: selection unchanged
#[test]
fn override_with_missing_category_is_skipped() {
    let platform = RecordingPlatform::new();
    let mut settings = settings_with_event_override();
    settings.category_overrides[0].category_id = 999;
    let service = GameChannelService::new(&platform, &settings);
    let guild = guild();
    let selection = service.get_channel_category(&guild, None).unwrap();

    let result = service.apply_category_override(&guild, "WWN Clash", selection.clone());

    assert_eq!(result, selection);
}

/// Tests that "the" inside a team name is not stripped.
///
/// Expected: "Brothers" matches the "Brothers Games" category
#[test]
fn keeps_interior_the_in_team_name() {
    let platform = RecordingPlatform::new();
    let settings = settings();
    let service = GameChannelService::new(&platform, &settings);
    let mut guild = guild();
    guild.categories.push(category(50, "Brothers Games", 4));

    let selection = service
        .get_channel_category(&guild, Some("The Brothers"))
        .unwrap();

    assert_eq!(selection.category.category_id, 50);
    assert_eq!(selection.scope, CategoryScope::Team);
}
