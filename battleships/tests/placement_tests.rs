use battleships::{
    board::CannotPlaceReason,
    ships::names::{FALLBACK_SHIP_NAME, SHIP_NAMES},
    Coordinate, Game, GameConfig, Orientation,
};

fn game(maximum_x: usize, maximum_y: usize) -> Game {
    Game::new(
        GameConfig::new("placement")
            .with_bounds(maximum_x, maximum_y)
            .with_seed(5),
    )
    .unwrap()
}

fn coords(cells: &[(usize, usize)]) -> Vec<Coordinate> {
    cells.iter().map(|&c| c.into()).collect()
}

#[test]
fn test_horizontal_placement() {
    let mut game = game(15, 15);
    let ship = game
        .try_place(Orientation::Horizontal, "alice", (3, 3).into(), 3, Some("Zealot"))
        .unwrap();
    assert_eq!(ship.name(), "Zealot");
    assert_eq!(ship.owner(), "alice");
    assert_eq!(
        ship.coords().collect::<Vec<_>>(),
        coords(&[(3, 3), (4, 3), (5, 3)])
    );
    assert_eq!(game.locations().len(), 3);
}

#[test]
fn test_vertical_placement() {
    let mut game = game(15, 15);
    let ship = game
        .try_place(Orientation::Vertical, "alice", (2, 7).into(), 4, None)
        .unwrap();
    assert_eq!(
        ship.coords().collect::<Vec<_>>(),
        coords(&[(2, 7), (2, 8), (2, 9), (2, 10)])
    );
}

#[test]
fn test_diagonal_placement() {
    let mut game = game(15, 15);
    let ship = game
        .try_place(Orientation::Diagonal, "alice", (13, 13).into(), 3, None)
        .unwrap();
    assert_eq!(
        ship.coords().collect::<Vec<_>>(),
        coords(&[(13, 13), (14, 14), (15, 15)])
    );
}

#[test]
fn test_placement_may_touch_the_far_edge() {
    let mut game = game(5, 5);
    assert!(game
        .try_place(Orientation::Horizontal, "alice", (3, 1).into(), 3, None)
        .is_ok());
    assert!(game
        .try_place(Orientation::Vertical, "alice", (5, 3).into(), 3, None)
        .is_ok());
}

#[test]
fn test_out_of_bounds_creates_nothing() {
    let mut game = game(5, 5);
    for &(orientation, start) in &[
        (Orientation::Horizontal, (4, 1)),
        (Orientation::Vertical, (1, 4)),
        (Orientation::Diagonal, (4, 2)),
        (Orientation::Horizontal, (0, 1)),
        (Orientation::Vertical, (1, 0)),
    ] {
        let err = game
            .try_place(orientation, "alice", start.into(), 3, None)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    }
    assert_eq!(game.number_of_ships(None), 0);
    assert!(game.locations().is_empty());
}

#[test]
fn test_collision_is_side_effect_free() {
    let mut game = game(15, 15);
    game.try_place(Orientation::Horizontal, "alice", (3, 3).into(), 3, None)
        .unwrap();

    let err = game
        .try_place(Orientation::Vertical, "bob", (4, 1).into(), 3, None)
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Collision);
    assert_eq!(err.cells(), &coords(&[(4, 1), (4, 2), (4, 3)])[..]);

    assert_eq!(game.number_of_ships(None), 1);
    assert_eq!(game.locations().len(), 3);

    // Neighbouring cells are fine.
    assert!(game
        .try_place(Orientation::Horizontal, "bob", (3, 4).into(), 3, None)
        .is_ok());
    assert!(game
        .try_place(Orientation::Diagonal, "bob", (6, 3).into(), 3, None)
        .is_ok());
}

#[test]
fn test_invalid_orientation_tag() {
    let err = "up".parse::<Orientation>().unwrap_err();
    let err: battleships::board::PlaceError = err.into();
    assert_eq!(err.reason(), CannotPlaceReason::InvalidOrientation);
    assert!(err.cells().is_empty());
}

#[test]
fn test_check_for_hit() {
    let mut game = game(15, 15);
    let id = game
        .try_place(Orientation::Horizontal, "alice", (3, 3).into(), 3, None)
        .unwrap()
        .id();
    for x in 3..=5 {
        assert_eq!(game.check_for_hit(&(x, 3).into()).map(|s| s.id()), Some(id));
    }
    assert!(game.check_for_hit(&(1, 1).into()).is_none());
    assert!(game.check_for_hit(&(6, 3).into()).is_none());
    assert!(game.check_for_hit(&(3, 4).into()).is_none());
}

#[test]
fn test_random_place_fits_within_bounds() {
    let mut game = game(10, 10);
    let bounds = game.bounds();
    for _ in 0..6 {
        let ship = game.random_place("alice", 3).expect("room for the ship");
        let cells: Vec<Coordinate> = ship.coords().collect();
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|c| bounds.contains(c)));
    }
    assert_eq!(game.number_of_ships(Some("alice")), 6);
}

#[test]
fn test_random_place_gives_up_when_nothing_fits() {
    let mut game = game(2, 2);
    assert!(game.random_place("alice", 3).is_none());
    assert!(game.locations().is_empty());

    let mut game = game_with_single_cell();
    assert!(game.random_place("alice", 1).is_some());
    assert!(game.random_place("alice", 1).is_none());
}

fn game_with_single_cell() -> Game {
    game(1, 1)
}

#[test]
fn test_generated_names_avoid_live_ships() {
    let mut game = game(60, 60);
    let mut names = Vec::new();
    for i in 0..SHIP_NAMES.len() {
        let ship = game
            .try_place(Orientation::Horizontal, "alice", (1, i + 1).into(), 1, None)
            .unwrap();
        names.push(ship.name().to_owned());
    }
    names.sort();
    names.dedup();
    assert_eq!(names.len(), SHIP_NAMES.len());

    let ship = game
        .try_place(Orientation::Horizontal, "alice", (5, 5).into(), 1, None)
        .unwrap();
    assert_eq!(ship.name(), FALLBACK_SHIP_NAME);
}

#[test]
fn test_zero_length_is_refused() {
    let mut game = game(15, 15);
    let err = game
        .try_place(Orientation::Horizontal, "alice", (3, 3).into(), 0, None)
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::ZeroLength);
    assert!(err.cells().is_empty());
    assert!(game.random_place("alice", 0).is_none());
    assert_eq!(game.number_of_ships(None), 0);
    assert!(game.locations().is_empty());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_random_place_on_a_huge_grid() {
    let mut game = game(1 << 31, 1 << 31);
    let bounds = game.bounds();
    let ship = game.random_place("alice", 3).expect("room for the ship");
    assert!(ship.coords().all(|c| bounds.contains(&c)));
    assert_eq!(game.locations().len(), 3);
}
