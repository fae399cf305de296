//! Append-only record of strikes. The log is both the game's history and the ledger
//! turn order is computed from.
use std::{collections::HashMap, fmt};

use chrono::{DateTime, Utc};

use crate::board::{Coordinate, Location};

/// Outcome of a strike.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeOutcome {
    /// Nothing was hit.
    Miss,
    /// The named ship, belonging to the named player, was hit and sunk.
    Sunk { ship: String, owner: String },
}

impl StrikeOutcome {
    /// Returns true if a ship was sunk.
    pub fn is_hit(&self) -> bool {
        match self {
            StrikeOutcome::Miss => false,
            StrikeOutcome::Sunk { .. } => true,
        }
    }
}

impl fmt::Display for StrikeOutcome {
    /// Short human-readable result, as recorded in the log.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrikeOutcome::Miss => f.write_str("miss:"),
            StrikeOutcome::Sunk { ship, owner } => {
                write!(f, "hit: ship {} belonging to {} was sunk.", ship, owner)
            }
        }
    }
}

/// A single strike. Actions are never changed once recorded.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Action {
    /// Position of this action in the log, starting from 0.
    seq: usize,
    player: String,
    location: Location,
    outcome: StrikeOutcome,
    result: String,
    created: DateTime<Utc>,
}

impl Action {
    /// Position of this action in the game's log.
    pub fn seq(&self) -> usize {
        self.seq
    }

    /// Name of the player who struck.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The location record created for the struck cell.
    pub fn location(&self) -> Location {
        self.location
    }

    /// What the strike achieved.
    pub fn outcome(&self) -> &StrikeOutcome {
        &self.outcome
    }

    /// Human-readable result text.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// When the strike happened.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Flatten this action for listing, tagged with the game it belongs to.
    pub fn view(&self, game: &str) -> ActionView {
        ActionView {
            game: game.to_owned(),
            player: self.player.clone(),
            location: self.location.coord(),
            result: self.result.clone(),
            created: self.created,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} struck {}: {}", self.player, self.location, self.result)
    }
}

/// Flattened form of an [`Action`] used for history listings.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionView {
    pub game: String,
    pub player: String,
    pub location: Coordinate,
    pub result: String,
    pub created: DateTime<Utc>,
}

/// Ordered actions of one game with a running count of turns taken by each player.
#[derive(Debug, Default, Clone)]
pub struct ActionLog {
    entries: Vec<Action>,
    taken: HashMap<String, usize>,
}

impl ActionLog {
    /// Number of actions recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the actions in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.entries.iter()
    }

    /// The most recent action, if any.
    pub fn last(&self) -> Option<&Action> {
        self.entries.last()
    }

    /// Number of actions recorded for `player`.
    pub fn count_for(&self, player: &str) -> usize {
        self.taken.get(player).copied().unwrap_or(0)
    }

    /// Append an action.
    pub(super) fn record(
        &mut self,
        player: &str,
        location: Location,
        outcome: StrikeOutcome,
    ) -> &Action {
        let seq = self.entries.len();
        *self.taken.entry(player.to_owned()).or_insert(0) += 1;
        self.entries.push(Action {
            seq,
            player: player.to_owned(),
            location,
            result: outcome.to_string(),
            outcome,
            created: Utc::now(),
        });
        &self.entries[seq]
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LocationId;

    fn loc(id: u64, x: usize, y: usize) -> Location {
        Location::new(LocationId(id), Coordinate::new(x, y))
    }

    #[test]
    fn result_text() {
        assert_eq!(StrikeOutcome::Miss.to_string(), "miss:");
        let sunk = StrikeOutcome::Sunk {
            ship: "Zealot".into(),
            owner: "alice".into(),
        };
        assert_eq!(sunk.to_string(), "hit: ship Zealot belonging to alice was sunk.");
        assert!(sunk.is_hit());
        assert!(!StrikeOutcome::Miss.is_hit());
    }

    #[test]
    fn counts_per_player_in_order() {
        let mut log = ActionLog::default();
        log.record("alice", loc(0, 1, 1), StrikeOutcome::Miss);
        log.record("bob", loc(1, 2, 2), StrikeOutcome::Miss);
        log.record("alice", loc(2, 3, 3), StrikeOutcome::Miss);

        assert_eq!(log.len(), 3);
        assert_eq!(log.count_for("alice"), 2);
        assert_eq!(log.count_for("bob"), 1);
        assert_eq!(log.count_for("carol"), 0);

        let seqs: Vec<usize> = log.iter().map(Action::seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(log.last().map(Action::player), Some("alice"));

        let view = log.iter().nth(1).unwrap().view("g");
        assert_eq!(view.game, "g");
        assert_eq!(view.player, "bob");
        assert_eq!(view.location, Coordinate::new(2, 2));
        assert_eq!(view.result, "miss:");
    }
}
