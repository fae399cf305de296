//! Types that make up the grid shared by all players of a game.

pub use self::{
    bounds::GridBounds,
    coordinate::Coordinate,
    errors::{CannotPlaceReason, PlaceError},
    location::{Location, LocationId},
};

mod bounds;
mod coordinate;
mod errors;
mod location;
