//! Errors raised while placing ships on the grid.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::ShapeProjection};

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The orientation requested was not one of horizontal, vertical or diagonal.
    #[error("the orientation requested was not recognised")]
    InvalidOrientation,
    /// The ship would occupy no cells.
    #[error("a ship must be at least one cell long")]
    ZeroLength,
    /// One or more of the ship's cells would fall outside the grid.
    #[error("the ship does not fit within the grid")]
    OutOfBounds,
    /// One or more of the ship's cells is already occupied by a live ship.
    #[error("the requested position was already occupied")]
    Collision,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    /// Cells the ship would have occupied. Empty if the orientation was not recognised
    /// or the length was 0.
    cells: ShapeProjection,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the attempted cells.
    pub(crate) fn new(reason: CannotPlaceReason, cells: ShapeProjection) -> Self {
        Self { reason, cells }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the cells where placement was attempted.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Extract the attempted cells from this error.
    pub fn into_cells(self) -> ShapeProjection {
        self.cells
    }
}
