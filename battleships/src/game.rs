//! The game engine.
//!
//! A [`Game`] owns its roster, its ships, every location record created by placements
//! and strikes, and the [`ActionLog`]. All ships share one grid; each player tries to
//! sink everybody else's ships while keeping at least one of their own afloat.
//!
//! Turns are strictly round-robin: a player may strike only while no other participant
//! has taken fewer turns than they have.
use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    board::{Coordinate, GridBounds, Location},
    player::Player,
    ships::{Ship, ShipView},
};

pub use self::{
    config::{
        ConfigError, GameConfig, DEFAULT_MAXIMUM, DEFAULT_SHIPS_PER_PERSON, DEFAULT_SHIP_LENGTH,
    },
    errors::{CannotStrikeReason, JoinError, StartError, StrikeError},
    history::{Action, ActionLog, ActionView, StrikeOutcome},
    placement::StartSearch,
};

mod config;
mod errors;
mod history;
mod placement;

/// A game in progress or waiting to start.
#[derive(Debug)]
pub struct Game {
    name: String,
    bounds: GridBounds,
    ships_per_person: usize,

    /// Participants, in the order they joined.
    players: Vec<String>,

    /// Live ships, in the order they were placed.
    ships: Vec<Ship>,

    /// Every location record created in this game, including those of sunk ships and
    /// of strikes.
    locations: Vec<Location>,

    actions: ActionLog,

    next_ship_id: u64,
    next_location_id: u64,

    rng: StdRng,

    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    started: Option<DateTime<Utc>>,
}

impl Game {
    /// Create a game with no players and no ships.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = Utc::now();
        Ok(Self {
            name: config.name,
            bounds,
            ships_per_person: config.ships_per_person,
            players: Vec::new(),
            ships: Vec::new(),
            locations: Vec::new(),
            actions: ActionLog::default(),
            next_ship_id: 0,
            next_location_id: 0,
            rng,
            created: now,
            modified: now,
            started: None,
        })
    }

    /// The game's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounds of the grid.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Ships generated for each player when the game starts.
    pub fn ships_per_person(&self) -> usize {
        self.ships_per_person
    }

    /// When the game was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// When the game was last changed.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// When ships were generated for the game, if they have been.
    pub fn started(&self) -> Option<DateTime<Utc>> {
        self.started
    }

    /// Returns true once ships have been generated or placed.
    pub fn is_started(&self) -> bool {
        self.started.is_some() || !self.ships.is_empty()
    }

    /// Names of the participants, in the order they joined.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns true if `player` is on the roster.
    pub fn is_participant(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    /// Add a player to the roster. Players may only join before the game starts.
    pub fn add_player(&mut self, player: &Player) -> Result<(), JoinError> {
        if self.is_participant(player.name()) {
            return Err(JoinError::AlreadyInGame(player.name().to_owned()));
        }
        if self.is_started() {
            return Err(JoinError::AlreadyStarted);
        }
        self.players.push(player.name().to_owned());
        self.touch();
        info!("{}: {} joined", self.name, player.name());
        Ok(())
    }

    /// Remove a player from the roster along with their live ships. Their past actions
    /// stay in the log. Returns the number of ships removed, or `None` if the player
    /// was not on the roster.
    pub fn remove_player(&mut self, player: &str) -> Option<usize> {
        let pos = self.players.iter().position(|p| p == player)?;
        self.players.remove(pos);
        let before = self.ships.len();
        self.ships.retain(|ship| ship.owner() != player);
        self.touch();
        Some(before - self.ships.len())
    }

    /// Generate [`ships_per_person`][Self::ships_per_person] ships of length
    /// [`DEFAULT_SHIP_LENGTH`] for every participant. Returns the number of ships
    /// created; a ship that cannot be fitted anywhere is skipped.
    ///
    /// A game can only be started once, and not after ships have been placed by hand.
    /// It needs at least one participant. If no ship could be fitted at all the game
    /// stays open, so players may still join and the start may be retried.
    pub fn start_game(&mut self) -> Result<usize, StartError> {
        if self.is_started() {
            return Err(StartError::AlreadyStarted);
        }
        if self.players.is_empty() {
            return Err(StartError::NoPlayers);
        }
        let roster = self.players.clone();
        let mut created = 0;
        for player in &roster {
            for _ in 0..self.ships_per_person {
                if self.random_place(player, DEFAULT_SHIP_LENGTH).is_some() {
                    created += 1;
                } else {
                    warn!("{}: could not fit a ship for {}", self.name, player);
                }
            }
        }
        if created == 0 {
            warn!("{}: no ship fits the grid, the game stays open", self.name);
            return Ok(0);
        }
        let now = Utc::now();
        self.started = Some(now);
        self.modified = now;
        info!(
            "{}: started with {} ships for {} players",
            self.name,
            created,
            roster.len()
        );
        Ok(created)
    }

    /// Iterate the live ships in placement order.
    pub fn ships(&self) -> std::slice::Iter<'_, Ship> {
        self.ships.iter()
    }

    /// Every location record created in this game, in creation order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The log of strikes.
    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    /// Find the first live ship, in placement order, occupying `coord`.
    pub fn check_for_hit(&self, coord: &Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(coord))
    }

    /// Strike `coord` on behalf of `player`.
    ///
    /// The strike is refused if the player is not in the game, if there are no live
    /// ships, or if the player has taken more turns than some other participant. A
    /// refused strike changes nothing. Otherwise any ship at `coord` is sunk and an
    /// action is recorded whether or not anything was hit.
    pub fn strike(&mut self, player: &mut Player, coord: Coordinate) -> Result<Action, StrikeError> {
        let name = player.name().to_owned();
        if !self.is_participant(&name) {
            return Err(StrikeError::new(CannotStrikeReason::NotInGame, &name, coord));
        }
        if self.ships.is_empty() {
            return Err(StrikeError::new(
                CannotStrikeReason::NoShipsInGame,
                &name,
                coord,
            ));
        }
        let taken = self.actions.count_for(&name);
        if self
            .players
            .iter()
            .any(|other| taken > self.actions.count_for(other))
        {
            return Err(StrikeError::new(CannotStrikeReason::NotYourTurn, &name, coord));
        }

        let outcome = match self.ships.iter().position(|ship| ship.occupies(&coord)) {
            Some(idx) => {
                let ship = self.ships.remove(idx);
                StrikeOutcome::Sunk {
                    ship: ship.name().to_owned(),
                    owner: ship.owner().to_owned(),
                }
            }
            None => StrikeOutcome::Miss,
        };
        let location = self.new_location(coord);
        let action = self.actions.record(&name, location, outcome).clone();
        info!("{}: {}", self.name, action);

        self.touch();
        player.touch();
        Ok(action)
    }

    /// Count live ships, optionally only those owned by `player`.
    pub fn number_of_ships(&self, player: Option<&str>) -> usize {
        match player {
            Some(player) => self.ships.iter().filter(|s| s.owner() == player).count(),
            None => self.ships.len(),
        }
    }

    /// Live ships of each participant, in roster order.
    pub fn ships_by_player(&self) -> Vec<(&str, Vec<&Ship>)> {
        self.players
            .iter()
            .map(|player| {
                let ships = self.ships.iter().filter(|s| s.owner() == player).collect();
                (player.as_str(), ships)
            })
            .collect()
    }

    /// Names and coordinates of `player`'s live ships.
    pub fn ships_of(&self, player: &str) -> Vec<ShipView> {
        self.ships
            .iter()
            .filter(|s| s.owner() == player)
            .map(Ship::view)
            .collect()
    }

    /// The winner, if exactly one participant still has ships. Returns `None` while
    /// two or more participants have ships and when nobody has any.
    pub fn get_winner(&self) -> Option<&str> {
        let mut counts: Vec<(&str, usize)> = self
            .players
            .iter()
            .map(|p| (p.as_str(), self.number_of_ships(Some(p))))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        let (top, top_ships) = *counts.first()?;
        if top_ships == 0 || counts[1..].iter().any(|&(_, ships)| ships > 0) {
            None
        } else {
            Some(top)
        }
    }

    /// The history of the game, oldest first.
    pub fn list_actions(&self) -> Vec<ActionView> {
        self.actions.iter().map(|a| a.view(&self.name)).collect()
    }

    fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn game(players: &[&str]) -> (Game, Vec<Player>) {
        let mut game = Game::new(GameConfig::new("test").with_seed(11)).unwrap();
        let players: Vec<Player> = players.iter().map(|&p| Player::new(p)).collect();
        for player in &players {
            game.add_player(player).unwrap();
        }
        (game, players)
    }

    #[test]
    fn join_rules() {
        let (mut game, players) = game(&["alice"]);
        assert_eq!(
            game.add_player(&players[0]),
            Err(JoinError::AlreadyInGame("alice".into()))
        );
        game.start_game().unwrap();
        assert_eq!(
            game.add_player(&Player::new("bob")),
            Err(JoinError::AlreadyStarted)
        );
    }

    #[test]
    fn start_generates_ships_once() {
        let (mut game, _) = game(&["alice", "bob"]);
        assert!(!game.is_started());
        assert_eq!(game.start_game(), Ok(6));
        assert!(game.is_started());
        assert_eq!(game.number_of_ships(None), 6);
        assert_eq!(game.number_of_ships(Some("alice")), 3);
        assert_eq!(game.locations().len(), 18);

        assert_eq!(game.start_game(), Err(StartError::AlreadyStarted));
        assert_eq!(game.number_of_ships(None), 6);
    }

    #[test]
    fn start_needs_players() {
        let mut game = Game::new(GameConfig::new("empty").with_seed(11)).unwrap();
        assert_eq!(game.start_game(), Err(StartError::NoPlayers));
        assert!(!game.is_started());
        game.add_player(&Player::new("alice")).unwrap();
        assert_eq!(game.start_game(), Ok(3));
    }

    #[test]
    fn start_without_room_leaves_game_open() {
        let mut game = Game::new(
            GameConfig::new("cramped")
                .with_bounds(2, 2)
                .with_seed(11),
        )
        .unwrap();
        game.add_player(&Player::new("alice")).unwrap();
        assert_eq!(game.start_game(), Ok(0));
        assert!(!game.is_started());
        assert_eq!(game.started(), None);
        assert_eq!(game.add_player(&Player::new("bob")), Ok(()));
        assert_eq!(game.start_game(), Ok(0));
    }

    #[test]
    fn manual_placement_counts_as_started() {
        let (mut game, _) = game(&["alice"]);
        game.try_place(Orientation::Vertical, "alice", (1, 1).into(), 3, None)
            .unwrap();
        assert_eq!(game.start_game(), Err(StartError::AlreadyStarted));
    }

    #[test]
    fn remove_player_drops_ships_and_keeps_history() {
        let (mut game, mut players) = game(&["alice", "bob"]);
        game.try_place(Orientation::Horizontal, "alice", (1, 1).into(), 3, None)
            .unwrap();
        game.try_place(Orientation::Horizontal, "bob", (1, 5).into(), 3, None)
            .unwrap();
        game.strike(&mut players[1], (9, 9).into()).unwrap();

        assert_eq!(game.remove_player("bob"), Some(1));
        assert_eq!(game.remove_player("bob"), None);
        assert_eq!(game.players(), &["alice".to_owned()][..]);
        assert_eq!(game.number_of_ships(None), 1);
        assert_eq!(game.list_actions().len(), 1);
        assert_eq!(game.get_winner(), Some("alice"));
    }
}
