//! Bounds of a game's grid.
use crate::board::Coordinate;

/// Inclusive, 1-indexed bounds of a grid: valid cells run from `(1, 1)` to
/// `(maximum_x, maximum_y)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridBounds {
    /// Largest valid `x`.
    maximum_x: usize,
    /// Largest valid `y`.
    maximum_y: usize,
}

impl GridBounds {
    /// Create new [`GridBounds`] with the given maximum `x` and `y`.
    /// Panics if either is 0 or if `maximum_x * maximum_y` exceeds `usize::MAX`.
    pub fn new(maximum_x: usize, maximum_y: usize) -> Self {
        match Self::try_new(maximum_x, maximum_y) {
            Some(bounds) => bounds,
            None => {
                if maximum_x == 0 || maximum_y == 0 {
                    panic!(
                        "GridBounds must be nonzero, got {}x{}",
                        maximum_x, maximum_y
                    );
                } else {
                    panic!(
                        "GridBounds too large: {} * {} > {}",
                        maximum_x,
                        maximum_y,
                        usize::MAX
                    );
                }
            }
        }
    }

    /// Create new [`GridBounds`] with the given maximum `x` and `y`.
    /// Returns `None` if either is 0 or if `maximum_x * maximum_y` exceeds `usize::MAX`.
    pub fn try_new(maximum_x: usize, maximum_y: usize) -> Option<Self> {
        if maximum_x == 0 || maximum_y == 0 {
            None
        } else {
            maximum_x.checked_mul(maximum_y).map(|_| Self {
                maximum_x,
                maximum_y,
            })
        }
    }

    /// Largest valid `x` coordinate.
    pub fn maximum_x(&self) -> usize {
        self.maximum_x
    }

    /// Largest valid `y` coordinate.
    pub fn maximum_y(&self) -> usize {
        self.maximum_y
    }

    /// Number of cells in the grid.
    pub fn total_size(&self) -> usize {
        self.maximum_x * self.maximum_y
    }

    /// Returns true if the coordinate lies within `[1, maximum_x] × [1, maximum_y]`.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        (1..=self.maximum_x).contains(&coord.x) && (1..=self.maximum_y).contains(&coord.y)
    }

    /// Convert an in-bounds coordinate to a linear index in `0..total_size()`.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y - 1) * self.maximum_x + (coord.x - 1))
        } else {
            None
        }
    }

    /// Get back a coordinate from a linear index. Panics if `idx >= total_size()`.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {:?}",
            idx,
            self
        );
        Coordinate {
            x: idx % self.maximum_x + 1,
            y: idx / self.maximum_x + 1,
        }
    }

    /// Get an iterator over rows of this grid, from `y = 1` upwards. Each row is an
    /// iterator over the coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let maximum_x = self.maximum_x;
        (1..=self.maximum_y).map(move |y| (1..=maximum_x).map(move |x| Coordinate { x, y }))
    }
}

impl Default for GridBounds {
    /// A 15x15 grid.
    fn default() -> Self {
        Self {
            maximum_x: 15,
            maximum_y: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_one_indexed_and_inclusive() {
        let bounds = GridBounds::new(4, 3);
        assert!(bounds.contains(&Coordinate::new(1, 1)));
        assert!(bounds.contains(&Coordinate::new(4, 3)));
        assert!(!bounds.contains(&Coordinate::new(0, 1)));
        assert!(!bounds.contains(&Coordinate::new(1, 0)));
        assert!(!bounds.contains(&Coordinate::new(5, 3)));
        assert!(!bounds.contains(&Coordinate::new(4, 4)));
    }

    #[test]
    fn linearize_matches_un_linearize() {
        let bounds = GridBounds::new(4, 3);
        for idx in 0..bounds.total_size() {
            let coord = bounds.un_linearize(idx);
            assert!(bounds.contains(&coord));
            assert_eq!(bounds.try_linearize(&coord), Some(idx));
        }
        assert_eq!(bounds.try_linearize(&Coordinate::new(0, 0)), None);
    }

    #[test]
    fn rejects_empty_bounds() {
        assert_eq!(GridBounds::try_new(0, 5), None);
        assert_eq!(GridBounds::try_new(5, 0), None);
        assert_eq!(GridBounds::try_new(usize::MAX, 2), None);
    }

    #[test]
    fn rows_cover_the_grid() {
        let bounds = GridBounds::new(3, 2);
        let rows: Vec<Vec<Coordinate>> = bounds
            .iter_coordinates()
            .map(|row| row.collect())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Coordinate::new(1, 1));
        assert_eq!(rows[1][2], Coordinate::new(3, 2));
    }
}
