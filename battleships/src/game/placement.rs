//! Ship placement: validated placement at a given start, and the random search used to
//! generate ships when a game starts.
use std::collections::HashSet;

use log::debug;
use rand::{distributions::Uniform, Rng};

use crate::{
    board::{CannotPlaceReason, Coordinate, GridBounds, Location, LocationId, PlaceError},
    game::Game,
    ships::{names, Line, Orientation, Ship, ShipId},
};

/// Random search over start cells, without replacement. Every cell of the grid is
/// offered at most once; the search is exhausted once every cell has been offered.
///
/// Starts are drawn lazily, so the cost of a search is proportional to the number of
/// starts actually tried rather than to the size of the grid.
#[derive(Debug, Clone)]
pub struct StartSearch {
    bounds: GridBounds,
    tried: HashSet<Coordinate>,
    /// Cells not yet offered. Only filled in once half the grid has been tried, after
    /// which drawing at random would mostly hit cells already offered.
    remaining: Option<Vec<Coordinate>>,
}

impl StartSearch {
    /// Begin a search over every cell within `bounds`.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            tried: HashSet::new(),
            remaining: None,
        }
    }

    /// Number of start cells offered so far.
    pub fn tried(&self) -> usize {
        self.tried.len()
    }

    /// Returns true once every cell has been offered.
    pub fn is_exhausted(&self) -> bool {
        self.tried.len() >= self.bounds.total_size()
    }

    /// Offer a uniformly chosen cell that has not been offered before, or `None` if the
    /// search is exhausted.
    pub fn next_start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        if self.is_exhausted() {
            return None;
        }
        if self.remaining.is_none() && self.tried.len() * 2 >= self.bounds.total_size() {
            let tried = &self.tried;
            self.remaining = Some(
                self.bounds
                    .iter_coordinates()
                    .flatten()
                    .filter(|coord| !tried.contains(coord))
                    .collect(),
            );
        }
        let start = match self.remaining.as_mut() {
            Some(remaining) => {
                let pick = rng.gen_range(0, remaining.len());
                remaining.swap_remove(pick)
            }
            None => {
                let xs = Uniform::new_inclusive(1, self.bounds.maximum_x());
                let ys = Uniform::new_inclusive(1, self.bounds.maximum_y());
                loop {
                    let start = Coordinate::new(rng.sample(&xs), rng.sample(&ys));
                    if !self.tried.contains(&start) {
                        break start;
                    }
                }
            }
        };
        self.tried.insert(start);
        Some(start)
    }
}

impl Game {
    /// Try to place a ship of `length` cells for `player` starting at `start` and
    /// extending in `orientation`. If `name` is `None`, a name not used by any live ship
    /// is chosen.
    ///
    /// Fails without creating any ship or location if `length` is 0, if a cell would
    /// fall outside the grid or if a cell is already occupied by a live ship.
    pub fn try_place(
        &mut self,
        orientation: Orientation,
        player: &str,
        start: Coordinate,
        length: usize,
        name: Option<&str>,
    ) -> Result<&Ship, PlaceError> {
        let shape = Line::try_new(length)
            .ok_or_else(|| PlaceError::new(CannotPlaceReason::ZeroLength, Vec::new()))?;
        let idx = self.place_ship(orientation, player, start, shape, name)?;
        Ok(&self.ships[idx])
    }

    /// Place a ship of `length` cells for `player` at a random position. One orientation
    /// is chosen for the whole search; start cells are then tried in random order until
    /// the ship fits. Returns `None` if no start cell fits the ship in that orientation,
    /// or if `length` is 0.
    pub fn random_place(&mut self, player: &str, length: usize) -> Option<&Ship> {
        let shape = Line::try_new(length)?;
        let orientation: Orientation = self.rng.gen();
        let mut search = StartSearch::new(self.bounds);
        while let Some(start) = search.next_start(&mut self.rng) {
            match self.place_ship(orientation, player, start, shape, None) {
                Ok(idx) => return Some(&self.ships[idx]),
                Err(err) => debug!(
                    "{}: {} ship for {} at {} rejected: {}",
                    self.name,
                    orientation,
                    player,
                    start,
                    err.reason()
                ),
            }
        }
        debug!(
            "{}: no room for a {} ship of length {} after {} starts",
            self.name,
            orientation,
            length,
            search.tried()
        );
        None
    }

    /// Validate and commit a placement, returning the index of the new ship.
    fn place_ship(
        &mut self,
        orientation: Orientation,
        player: &str,
        start: Coordinate,
        shape: Line,
        name: Option<&str>,
    ) -> Result<usize, PlaceError> {
        let cells = match shape.candidates(start, orientation) {
            Some(cells) => cells,
            None => return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, Vec::new())),
        };
        if !cells.iter().all(|cell| self.bounds.contains(cell)) {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, cells));
        }
        if cells.iter().any(|cell| self.check_for_hit(cell).is_some()) {
            return Err(PlaceError::new(CannotPlaceReason::Collision, cells));
        }

        let name = match name {
            Some(name) => name.to_owned(),
            None => {
                let ships = &self.ships;
                names::pick_name(&mut self.rng, |n| ships.iter().any(|s| s.name() == n))
                    .to_owned()
            }
        };
        let cells: Vec<Location> = cells.into_iter().map(|c| self.new_location(c)).collect();
        let id = ShipId(self.next_ship_id);
        self.next_ship_id += 1;
        debug!(
            "{}: placed {} for {} at {}",
            self.name,
            name,
            player,
            cells
                .iter()
                .map(Location::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );
        self.ships
            .push(Ship::new(id, name, player.to_owned(), cells));
        Ok(self.ships.len() - 1)
    }

    /// Create a fresh location record.
    pub(super) fn new_location(&mut self, coord: Coordinate) -> Location {
        let location = Location::new(LocationId(self.next_location_id), coord);
        self.next_location_id += 1;
        self.locations.push(location);
        location
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn search_offers_every_cell_once() {
        let bounds = GridBounds::new(4, 5);
        let mut rng = StdRng::seed_from_u64(3);
        let mut search = StartSearch::new(bounds);
        let mut seen = HashSet::new();
        while let Some(start) = search.next_start(&mut rng) {
            assert!(bounds.contains(&start));
            assert!(seen.insert(start), "{} offered twice", start);
        }
        assert_eq!(seen.len(), 20);
        assert_eq!(search.tried(), 20);
        assert!(search.is_exhausted());
        assert_eq!(search.next_start(&mut rng), None);
    }

    #[test]
    fn search_on_a_huge_grid_is_lazy() {
        let bounds = GridBounds::new(1 << 15, 1 << 15);
        let mut rng = StdRng::seed_from_u64(3);
        let mut search = StartSearch::new(bounds);
        for _ in 0..100 {
            let start = search.next_start(&mut rng).unwrap();
            assert!(bounds.contains(&start));
        }
        assert_eq!(search.tried(), 100);
        assert!(search.remaining.is_none());
        assert!(!search.is_exhausted());
    }
}
