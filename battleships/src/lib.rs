// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Turn-based multiplayer Battleships.
//!
//! Any number of players join a [`Game`][game::Game] played on a single shared grid.
//! When the game starts every participant receives the same number of randomly placed
//! ships. Players then take turns striking cells in strict round-robin order; a single
//! hit sinks the whole ship it lands on, and the last player with ships afloat wins.
//!
//! The crate is organised from the grid upwards:
//!
//! * [`board`] holds coordinates, grid bounds and the location records that ships and
//!   strikes create.
//! * [`ships`] defines ships, their orientations and the naming policy.
//! * [`game`] is the engine: placement, strikes, turn order, winner detection and the
//!   action log.
//! * [`registry`] keeps players and games by name for callers serving many games at
//!   once, serialising all work on any one game.

pub mod board;
pub mod game;
pub mod player;
pub mod registry;
pub mod ships;

pub use crate::{
    board::{Coordinate, GridBounds, Location, LocationId},
    game::{Action, ActionView, Game, GameConfig, StrikeOutcome},
    player::Player,
    registry::{Registry, RegistryError},
    ships::{Orientation, Ship, ShipId, ShipView},
};
