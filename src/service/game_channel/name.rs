//! Channel name generation.
//!
//! Turns a game named 'The Mountain of Fire' played by team 'The Ronin' into
//! something like `e41-mountain-of-fire_ronin`. Season games (`S4`, `S5`) and
//! `WWN` event games put the game ID last so the channels sort by name instead.

use crate::model::game::UNNAMED_GAME;

/// Game name prefixes whose channels carry the game ID as a suffix.
const SUFFIX_ID_PREFIXES: [&str; 3] = ["s4", "s5", "wwn"];

/// Generates the channel name for a game.
///
/// The same inputs always produce the same name. A leading "The "/"the " is
/// removed from both the game and the team name, the two are joined with an
/// underscore, whitespace runs become single hyphens, and the result is
/// lowercased. Discord enforces its own character rules on top of this.
///
/// # Arguments
/// - `game_id` - Game ID
/// - `game_name` - Game name; `None` or empty falls back to "No Name"
/// - `team_name` - Team the channel is for; `None` for a whole-game channel
///
/// # Returns
/// - `String` - `e{id}-{slug}` or, for season and event games, `{slug}-e{id}`
pub fn generate_channel_name(game_id: i64, game_name: Option<&str>, team_name: Option<&str>) -> String {
    let game_name = match game_name {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::warn!("No game name passed to generate_channel_name for game {}", game_id);
            UNNAMED_GAME
        }
    };

    let team_name = match team_name {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::info!("No team name passed to generate_channel_name for game {}", game_id);
            ""
        }
    };

    let game_team = format!("{}_{}", strip_article(game_name), strip_article(team_name));
    let slug = game_team
        .trim_matches('_')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    let lowered = game_name.to_lowercase();
    if SUFFIX_ID_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        format!("{}-e{}", slug, game_id)
    } else {
        format!("e{}-{}", game_id, slug)
    }
}

/// Removes a leading "The " or "the " from a name.
fn strip_article(name: &str) -> &str {
    name.strip_prefix("The ")
        .or_else(|| name.strip_prefix("the "))
        .unwrap_or(name)
}
