use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a strike was refused.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotStrikeReason {
    /// The striking player has not joined the game.
    #[error("player is not in the game")]
    NotInGame,

    /// There are no live ships, either because the game has not started or because
    /// every ship has been sunk.
    #[error("there are no ships in the game")]
    NoShipsInGame,

    /// The striking player has already taken more turns than some other participant.
    #[error("player must wait for the other players to take their turn")]
    NotYourTurn,
}

/// Error returned when a strike is refused. A refused strike records nothing.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{player} could not strike {coord}: {reason}")]
pub struct StrikeError {
    /// Reason why the strike was refused.
    #[source]
    reason: CannotStrikeReason,

    /// Name of the player who attempted the strike.
    player: String,

    /// The coordinate that was targeted.
    coord: Coordinate,
}

impl StrikeError {
    /// Construct a strike error with the given reason.
    pub(super) fn new(reason: CannotStrikeReason, player: &str, coord: Coordinate) -> Self {
        Self {
            reason,
            player: player.to_owned(),
            coord,
        }
    }

    /// Get the reason the strike was refused.
    pub fn reason(&self) -> CannotStrikeReason {
        self.reason
    }

    /// Name of the player who attempted the strike.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The targeted coordinate.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when a player cannot join a game.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum JoinError {
    /// The player is already on the roster.
    #[error("player {0} is already in the game")]
    AlreadyInGame(String),

    /// Ships have already been placed.
    #[error("the game has already started")]
    AlreadyStarted,
}

/// Error returned when ships cannot be generated for a game.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum StartError {
    /// The game was started before or already holds ships.
    #[error("the game has already started")]
    AlreadyStarted,

    /// Nobody has joined the game.
    #[error("the game has no players")]
    NoPlayers,
}
