//! Settings a game is created with.
use thiserror::Error;

use crate::board::GridBounds;

/// Default largest `x` and `y` of a new game's grid.
pub const DEFAULT_MAXIMUM: usize = 15;

/// Default number of ships generated for each player when a game starts.
pub const DEFAULT_SHIPS_PER_PERSON: usize = 3;

/// Length of every ship generated when a game starts.
pub const DEFAULT_SHIP_LENGTH: usize = 3;

/// Reason a [`GameConfig`] was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("game name must not be empty")]
    EmptyName,
    #[error("maximum_x must be at least 1")]
    ZeroWidth,
    #[error("maximum_y must be at least 1")]
    ZeroHeight,
    #[error("ships_per_person must be at least 1")]
    ZeroShips,
    #[error("grid of {0}x{1} cells is too large")]
    TooLarge(usize, usize),
}

/// Settings for a new [`Game`][crate::game::Game].
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Unique name of the game.
    pub name: String,
    /// Largest valid `x` coordinate.
    pub maximum_x: usize,
    /// Largest valid `y` coordinate.
    pub maximum_y: usize,
    /// Ships generated for each player by [`Game::start_game`][crate::game::Game::start_game].
    pub ships_per_person: usize,
    /// Seed for the game's random number generator. Games without a seed draw one from
    /// the operating system.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Configuration with the default 15x15 grid and 3 ships per player.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            maximum_x: DEFAULT_MAXIMUM,
            maximum_y: DEFAULT_MAXIMUM,
            ships_per_person: DEFAULT_SHIPS_PER_PERSON,
            seed: None,
        }
    }

    /// Set the grid bounds.
    pub fn with_bounds(mut self, maximum_x: usize, maximum_y: usize) -> Self {
        self.maximum_x = maximum_x;
        self.maximum_y = maximum_y;
        self
    }

    /// Set the number of ships each player receives.
    pub fn with_ships_per_person(mut self, ships_per_person: usize) -> Self {
        self.ships_per_person = ships_per_person;
        self
    }

    /// Fix the seed of the game's random number generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration, returning the grid bounds it describes.
    pub fn validate(&self) -> Result<GridBounds, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.maximum_x == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.maximum_y == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.ships_per_person == 0 {
            return Err(ConfigError::ZeroShips);
        }
        GridBounds::try_new(self.maximum_x, self.maximum_y)
            .ok_or(ConfigError::TooLarge(self.maximum_x, self.maximum_y))
    }
}
