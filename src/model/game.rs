/// A game as seen by the channel manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    /// Display name; games created without one get a placeholder channel name
    pub name: Option<String>,
    pub host: Option<GameHost>,
    pub notes: Option<String>,
}

impl Game {
    /// Display name, or the placeholder used for unnamed games.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED_GAME,
        }
    }
}

/// Placeholder name used for games without a name.
pub const UNNAMED_GAME: &str = "No Name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHost {
    pub name: String,
}

/// Roster entry for a player taking part in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Discord user ID of the player
    pub discord_id: u64,
}

impl Player {
    pub fn new(discord_id: u64) -> Self {
        Self { discord_id }
    }

    /// Discord mention markup for the player.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.discord_id)
    }
}
