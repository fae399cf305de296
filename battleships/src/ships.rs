//! Ships, their shapes and their names.
use std::fmt;

use crate::board::{Coordinate, Location};

pub use self::linear::{Line, Orientation, ParseOrientationError};

mod linear;
pub mod names;

/// Ordered cells a ship occupies or would occupy.
pub type ShapeProjection = Vec<Coordinate>;

/// Identifier of a ship, unique within one game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(pub(crate) u64);

impl ShipId {
    /// The raw numeric value of this id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live ship. Ships have no damage state: the first strike on any of their cells
/// removes them from the game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    id: ShipId,
    name: String,
    /// Name of the owning player.
    owner: String,
    /// Location records created for this ship, in placement order.
    cells: Vec<Location>,
}

impl Ship {
    pub(crate) fn new(id: ShipId, name: String, owner: String, cells: Vec<Location>) -> Self {
        Self {
            id,
            name,
            owner,
            cells,
        }
    }

    /// Get the ID of the ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Name of the ship.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the player who owns this ship.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The location records occupied by this ship.
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.cells.iter().map(Location::coord)
    }

    /// Returns true if any of this ship's cells is at `coord`.
    pub fn occupies(&self, coord: &Coordinate) -> bool {
        self.coords().any(|c| &c == coord)
    }

    /// Snapshot of the ship suitable for listing.
    pub fn view(&self) -> ShipView {
        ShipView {
            name: self.name.clone(),
            locations: self.coords().collect(),
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.name)
    }
}

/// A ship's name and occupied coordinates.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipView {
    pub name: String,
    pub locations: Vec<Coordinate>,
}
