//! Greeting message for new game channels.

use crate::{
    model::{
        game::{Game, Player},
        guild::ChannelSnapshot,
    },
    platform::ChatPlatform,
};

use super::GameChannelService;

/// Builds the greeting posted into a freshly created game channel.
///
/// # Arguments
/// - `roster_names` - Human-readable team rosters, already formatted by the caller
/// - `game` - Game the channel is for
/// - `players` - Players to mention
/// - `full_game` - Whole-game channel (`true`) or a single team's channel (`false`)
///
/// # Returns
/// - `String` - Message content ready to send
pub fn compose_greeting(roster_names: &str, game: &Game, players: &[Player], full_game: bool) -> String {
    let mentions = players
        .iter()
        .map(Player::mention)
        .collect::<Vec<_>>()
        .join(" / ");

    let (chan_type, allies) = if full_game {
        (
            "**full game channel**",
            format!("Participants in this game are {}\n", mentions),
        )
    } else {
        (
            "**allied team channel**",
            format!("Your teammates are {}\n", mentions),
        )
    };

    let mut match_content = String::new();
    if let Some(host) = &game.host {
        match_content.push_str(&format!("Game hosted by **{}**\n", host.name));
    }
    if let Some(notes) = game.notes.as_deref().filter(|notes| !notes.is_empty()) {
        match_content.push_str(&format!("**Notes:** {}\n", notes));
    }

    format!(
        "This is the {} for game **{}**, ID {}.\n{}\
         The teams for this game are:\n{}\n\n\
         {}\
         *This channel will self-destruct soon after the game is marked as concluded.*",
        chan_type,
        game.display_name(),
        game.id,
        allies,
        roster_names,
        match_content
    )
}

impl<'a, P: ChatPlatform> GameChannelService<'a, P> {
    /// Posts the greeting into a new game channel.
    ///
    /// A failure is logged and swallowed; the channel stays in place either way.
    pub async fn greet_game_channel(
        &self,
        channel: &ChannelSnapshot,
        roster_names: &str,
        game: &Game,
        players: &[Player],
        full_game: bool,
    ) {
        let content = compose_greeting(roster_names, game, players, full_game);

        if let Err(e) = self.platform.send_message(channel.channel_id, &content).await {
            tracing::error!(
                "Could not send greeting to channel {} for game {}: {}",
                channel.channel_id,
                game.id,
                e
            );
        }
    }
}
