//! Players taking part in games.
use chrono::{DateTime, Utc};

/// A player, identified by a unique name. Players join games by name; ships and
/// actions refer back to them by that name.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    name: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Player {
    /// Create a player with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }

    /// The player's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the player was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// When the player last acted.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Record activity by this player.
    pub(crate) fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
