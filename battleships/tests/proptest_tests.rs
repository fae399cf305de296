use battleships::{board::CannotPlaceReason, Coordinate, Game, GameConfig, Orientation};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Horizontal),
        Just(Orientation::Vertical),
        Just(Orientation::Diagonal),
    ]
}

fn empty_game(maximum_x: usize, maximum_y: usize, seed: u64) -> Game {
    Game::new(
        GameConfig::new("prop")
            .with_bounds(maximum_x, maximum_y)
            .with_seed(seed),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn placement_on_empty_grid_depends_only_on_bounds(
        maximum_x in 1usize..20,
        maximum_y in 1usize..20,
        x in 0usize..22,
        y in 0usize..22,
        length in 1usize..6,
        orientation in orientation(),
    ) {
        let mut game = empty_game(maximum_x, maximum_y, 0);
        let bounds = game.bounds();
        let (dx, dy) = match orientation {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
            Orientation::Diagonal => (1, 1),
        };
        let expected: Vec<Coordinate> = (0..length)
            .map(|i| Coordinate::new(x + i * dx, y + i * dy))
            .collect();
        let fits = expected.iter().all(|c| bounds.contains(c));

        match game.try_place(orientation, "alice", Coordinate::new(x, y), length, None) {
            Ok(ship) => {
                prop_assert!(fits);
                prop_assert_eq!(ship.coords().collect::<Vec<_>>(), expected);
            }
            Err(err) => {
                prop_assert!(!fits);
                prop_assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
                prop_assert!(game.locations().is_empty());
            }
        }
    }

    #[test]
    fn hits_match_ship_cells(
        placements in prop::collection::vec(
            (1usize..=15, 1usize..=15, 1usize..5, orientation()),
            1..8,
        ),
        probe_x in 1usize..=15,
        probe_y in 1usize..=15,
    ) {
        let mut game = empty_game(15, 15, 1);
        for (x, y, length, orientation) in placements {
            let _ = game.try_place(orientation, "alice", Coordinate::new(x, y), length, None);
        }
        let probe = Coordinate::new(probe_x, probe_y);
        let owners: Vec<_> = game.ships().filter(|s| s.occupies(&probe)).map(|s| s.id()).collect();
        prop_assert!(owners.len() <= 1, "cells must never be shared: {:?}", owners);
        prop_assert_eq!(game.check_for_hit(&probe).map(|s| s.id()), owners.first().copied());
    }

    #[test]
    fn random_place_stays_on_the_grid(
        maximum_x in 1usize..12,
        maximum_y in 1usize..12,
        length in 1usize..5,
        seed in any::<u64>(),
    ) {
        let mut game = empty_game(maximum_x, maximum_y, seed);
        let bounds = game.bounds();
        let placed = game
            .random_place("alice", length)
            .map(|ship| ship.coords().collect::<Vec<_>>());
        match placed {
            Some(cells) => {
                prop_assert_eq!(cells.len(), length);
                prop_assert!(cells.iter().all(|c| bounds.contains(c)));
            }
            None => prop_assert!(length > maximum_x.min(maximum_y)),
        }
    }
}
