use std::fmt;

use crate::board::Coordinate;

/// Identifier of a [`Location`] record, unique within one game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LocationId(pub(crate) u64);

impl LocationId {
    /// The raw numeric value of this id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A location record. Every ship placement and every strike creates fresh records, so
/// several locations may share the same coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Location {
    id: LocationId,
    coord: Coordinate,
}

impl Location {
    pub(crate) fn new(id: LocationId, coord: Coordinate) -> Self {
        Self { id, coord }
    }

    /// Id of this record.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// The grid coordinate this record refers to.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.coord, f)
    }
}
