//! Players and games kept by name.
//!
//! Every game lives behind its own mutex, so strikes and placements on one game are
//! serialised while different games proceed in parallel. When both are needed, the
//! game lock is always taken before the players lock, and the players lock is held
//! until the game has been changed so that a player deleted meanwhile cannot end up
//! on a roster.
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, RwLock},
};

use log::info;
use thiserror::Error;

use crate::{
    board::{Coordinate, PlaceError},
    game::{
        Action, ActionView, ConfigError, Game, GameConfig, JoinError, StartError, StrikeError,
    },
    player::Player,
    ships::{Orientation, ShipView},
};

/// Errors returned by [`Registry`] operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("player {0} already exists")]
    PlayerExists(String),
    #[error("game {0} already exists")]
    GameExists(String),
    #[error("could not find player {0}")]
    UnknownPlayer(String),
    #[error("could not find game {0}")]
    UnknownGame(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Join(#[from] JoinError),
    #[error(transparent)]
    Start(#[from] StartError),
    #[error(transparent)]
    Place(#[from] PlaceError),
    #[error(transparent)]
    Strike(#[from] StrikeError),
    /// A thread panicked while holding a lock; the state it guarded can no longer be
    /// trusted.
    #[error("internal state unavailable")]
    Poisoned,
}

type Result<T> = std::result::Result<T, RegistryError>;

/// Thread-safe store of players and games.
#[derive(Debug, Default)]
pub struct Registry {
    players: RwLock<HashMap<String, Player>>,
    games: RwLock<HashMap<String, Arc<Mutex<Game>>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player.
    pub fn register_player(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        let mut players = self.players.write().map_err(|_| RegistryError::Poisoned)?;
        if players.contains_key(name) {
            return Err(RegistryError::PlayerExists(name.to_owned()));
        }
        players.insert(name.to_owned(), Player::new(name));
        info!("registered player {}", name);
        Ok(())
    }

    /// Names of all players, sorted.
    pub fn players(&self) -> Result<Vec<String>> {
        let players = self.players.read().map_err(|_| RegistryError::Poisoned)?;
        let mut names: Vec<String> = players.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// A snapshot of the named player.
    pub fn player(&self, name: &str) -> Result<Player> {
        let players = self.players.read().map_err(|_| RegistryError::Poisoned)?;
        players
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownPlayer(name.to_owned()))
    }

    /// Delete a player. They leave every game they joined and their live ships are
    /// removed; their past actions stay in each game's history.
    pub fn delete_player(&self, name: &str) -> Result<()> {
        self.players
            .write()
            .map_err(|_| RegistryError::Poisoned)?
            .remove(name)
            .ok_or_else(|| RegistryError::UnknownPlayer(name.to_owned()))?;
        for game in self.all_games()? {
            let mut game = lock(&game)?;
            if let Some(ships) = game.remove_player(name) {
                info!("{} left {}, {} ships removed", name, game.name(), ships);
            }
        }
        info!("deleted player {}", name);
        Ok(())
    }

    /// Create a new game.
    pub fn register_game(&self, config: GameConfig) -> Result<()> {
        let mut games = self.games.write().map_err(|_| RegistryError::Poisoned)?;
        if games.contains_key(&config.name) {
            return Err(RegistryError::GameExists(config.name));
        }
        let game = Game::new(config)?;
        info!(
            "registered game {} ({}x{}, {} ships each)",
            game.name(),
            game.bounds().maximum_x(),
            game.bounds().maximum_y(),
            game.ships_per_person()
        );
        games.insert(game.name().to_owned(), Arc::new(Mutex::new(game)));
        Ok(())
    }

    /// Names of all games, sorted.
    pub fn games(&self) -> Result<Vec<String>> {
        let games = self.games.read().map_err(|_| RegistryError::Poisoned)?;
        let mut names: Vec<String> = games.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Delete a game along with its ships, locations and history.
    pub fn delete_game(&self, name: &str) -> Result<()> {
        self.games
            .write()
            .map_err(|_| RegistryError::Poisoned)?
            .remove(name)
            .ok_or_else(|| RegistryError::UnknownGame(name.to_owned()))?;
        info!("deleted game {}", name);
        Ok(())
    }

    /// Run `f` with exclusive access to the named game.
    pub fn with_game<T, F>(&self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Game) -> T,
    {
        let game = self.game(name)?;
        let mut game = lock(&game)?;
        Ok(f(&mut game))
    }

    /// Add a registered player to a game.
    pub fn add_player_to_game(&self, game: &str, player: &str) -> Result<()> {
        let game = self.game(game)?;
        let mut game = lock(&game)?;
        let players = self.players.read().map_err(|_| RegistryError::Poisoned)?;
        let player = players
            .get(player)
            .ok_or_else(|| RegistryError::UnknownPlayer(player.to_owned()))?;
        game.add_player(player)?;
        Ok(())
    }

    /// Generate ships for every participant. Returns the number of ships created.
    pub fn start_game(&self, game: &str) -> Result<usize> {
        Ok(self.with_game(game, Game::start_game)??)
    }

    /// Place a ship by hand for a registered player.
    pub fn place_ship(
        &self,
        game: &str,
        player: &str,
        orientation: Orientation,
        start: Coordinate,
        length: usize,
        name: Option<&str>,
    ) -> Result<ShipView> {
        let game = self.game(game)?;
        let mut game = lock(&game)?;
        let players = self.players.read().map_err(|_| RegistryError::Poisoned)?;
        if !players.contains_key(player) {
            return Err(RegistryError::UnknownPlayer(player.to_owned()));
        }
        let ship = game.try_place(orientation, player, start, length, name)?;
        Ok(ship.view())
    }

    /// Strike `coord` in the named game on behalf of the named player.
    pub fn strike(&self, game: &str, player: &str, coord: Coordinate) -> Result<Action> {
        let game = self.game(game)?;
        let mut game = lock(&game)?;
        let mut players = self.players.write().map_err(|_| RegistryError::Poisoned)?;
        let player = players
            .get_mut(player)
            .ok_or_else(|| RegistryError::UnknownPlayer(player.to_owned()))?;
        Ok(game.strike(player, coord)?)
    }

    /// The winner of the named game, if there is one yet.
    pub fn winner(&self, game: &str) -> Result<Option<String>> {
        self.with_game(game, |game| game.get_winner().map(str::to_owned))
    }

    /// History of the named game, oldest first.
    pub fn history(&self, game: &str) -> Result<Vec<ActionView>> {
        self.with_game(game, |game| game.list_actions())
    }

    /// Live ships of `player` in the named game.
    pub fn ships_of(&self, game: &str, player: &str) -> Result<Vec<ShipView>> {
        self.with_game(game, |game| game.ships_of(player))
    }

    /// Number of live ships in the named game, optionally only those of `player`.
    pub fn number_of_ships(&self, game: &str, player: Option<&str>) -> Result<usize> {
        self.with_game(game, |game| game.number_of_ships(player))
    }

    fn game(&self, name: &str) -> Result<Arc<Mutex<Game>>> {
        let games = self.games.read().map_err(|_| RegistryError::Poisoned)?;
        games
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownGame(name.to_owned()))
    }

    fn all_games(&self) -> Result<Vec<Arc<Mutex<Game>>>> {
        let games = self.games.read().map_err(|_| RegistryError::Poisoned)?;
        Ok(games.values().cloned().collect())
    }
}

fn lock(game: &Mutex<Game>) -> Result<MutexGuard<'_, Game>> {
    game.lock().map_err(|_| RegistryError::Poisoned)
}
