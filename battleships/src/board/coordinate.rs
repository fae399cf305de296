use std::fmt;

/// The coordinates of a cell in the grid. Cells that ships may occupy are 1-indexed; see
/// [`GridBounds`][crate::board::GridBounds].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by `(dx, dy)`. Returns `None` on overflow.
    pub(crate) fn checked_offset(self, dx: usize, dy: usize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
