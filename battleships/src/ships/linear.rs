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

use std::{fmt, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::{
    board::{CannotPlaceReason, Coordinate, PlaceError},
    ships::ShapeProjection,
};

/// Direction a ship extends in from its start cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Towards larger `x`.
    Horizontal,
    /// Towards larger `y`.
    Vertical,
    /// Towards larger `x` and `y` together.
    Diagonal,
}

impl Orientation {
    /// All orientations.
    pub const ALL: &'static [Orientation] = &[
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
    ];

    /// Textual tag of the orientation.
    pub fn tag(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal",
        }
    }

    /// Step between consecutive cells as `(dx, dy)`.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
            Orientation::Diagonal => (1, 1),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl Distribution<Orientation> for Standard {
    /// Choose an orientation uniformly.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::ALL[rng.gen_range(0, Orientation::ALL.len())]
    }
}

/// Error returned when an orientation tag is not recognised.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid orientation {tag:?}, expected horizontal, vertical or diagonal")]
pub struct ParseOrientationError {
    tag: String,
}

impl ParseOrientationError {
    /// The tag that failed to parse.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl From<ParseOrientationError> for PlaceError {
    fn from(_: ParseOrientationError) -> Self {
        PlaceError::new(CannotPlaceReason::InvalidOrientation, Vec::new())
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parse a case-insensitive orientation tag. Single letter abbreviations are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            "diagonal" | "d" => Ok(Orientation::Diagonal),
            _ => Err(ParseOrientationError { tag: s.to_owned() }),
        }
    }
}

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        Self::try_new(len).expect("ship length must be nonzero")
    }

    /// Construct a linear ship with the specified length, or `None` if len is 0.
    pub fn try_new(len: usize) -> Option<Self> {
        if len > 0 {
            Some(Line(len))
        } else {
            None
        }
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Compute the cells this shape would occupy starting at `start` and extending in
    /// `orientation`. Does not check bounds or occupancy. Returns `None` only if a
    /// coordinate would overflow `usize`.
    pub fn candidates(&self, start: Coordinate, orientation: Orientation) -> Option<ShapeProjection> {
        let (dx, dy) = orientation.step();
        (0..self.0)
            .map(|i| start.checked_offset(dx.checked_mul(i)?, dy.checked_mul(i)?))
            .collect()
    }
}
