use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    CellState, Coord, EngineError, Grid, Orientation, ShotOutcome, CANONICAL_FLEET,
};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut grid = Grid::new(10);
    assert!(grid.place_vessel(c(0, 0), 3, Orientation::Horizontal));
    assert_eq!(grid.vessels()[0].cells(), &[c(0, 0), c(1, 0), c(2, 0)]);
    assert!(!grid.place_vessel(c(3, 0), 1, Orientation::Horizontal));
    // diagonal contact is rejected too
    assert!(!grid.place_vessel(c(3, 1), 1, Orientation::Horizontal));
    assert!(grid.place_vessel(c(4, 0), 1, Orientation::Horizontal));
    assert_eq!(grid.vessels().len(), 2);
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut grid = Grid::new(10);
    assert!(!grid.place_vessel(c(8, 0), 3, Orientation::Horizontal));
    assert!(!grid.place_vessel(c(0, 9), 2, Orientation::Vertical));
    assert!(!grid.place_vessel(c(10, 0), 1, Orientation::Horizontal));
    assert!(!grid.place_vessel(c(0, 0), 0, Orientation::Horizontal));
    assert!(grid.vessels().is_empty());
    assert!(grid.place_vessel(c(7, 0), 3, Orientation::Horizontal));
}

#[test]
fn test_single_cell_vessel_sinks() {
    let mut grid = Grid::new(10);
    assert!(grid.place_vessel(c(5, 5), 1, Orientation::Horizontal));
    let (outcome, vessel) = grid.receive_shot(c(5, 5));
    assert_eq!(outcome, ShotOutcome::Sunk);
    assert_eq!(vessel.map(|v| v.cells().to_vec()), Some(vec![c(5, 5)]));
    assert!(grid.all_sunk());
}

#[test]
fn test_hit_then_sink_and_repeat() {
    let mut grid = Grid::new(10);
    assert!(grid.place_vessel(c(2, 2), 2, Orientation::Vertical));
    assert_eq!(grid.receive_shot(c(2, 2)).0, ShotOutcome::Hit);
    assert_eq!(grid.cell_state(c(2, 2), false), CellState::Hit);
    assert_eq!(grid.receive_shot(c(3, 3)).0, ShotOutcome::Miss);
    assert_eq!(grid.receive_shot(c(2, 3)).0, ShotOutcome::Sunk);
    assert_eq!(grid.cell_state(c(2, 2), false), CellState::Sunk);
    assert_eq!(grid.cell_state(c(2, 3), false), CellState::Sunk);
    assert_eq!(grid.cell_state(c(3, 3), false), CellState::Miss);

    let (outcome, vessel) = grid.receive_shot(c(2, 3));
    assert_eq!(outcome, ShotOutcome::AlreadyShot);
    assert!(vessel.is_none());
    assert_eq!(grid.shots().len(), 3);
    assert!(!grid.shots().values().any(|o| *o == ShotOutcome::AlreadyShot));
}

#[test]
#[should_panic(expected = "outside")]
fn test_out_of_bounds_shot_panics() {
    let mut grid = Grid::new(4);
    grid.receive_shot(c(4, 0));
}

#[test]
fn test_all_sunk_requires_fleet() {
    let grid = Grid::new(10);
    assert!(!grid.all_sunk());
}

#[test]
fn test_cell_state_reveal() {
    let mut grid = Grid::new(5);
    assert!(grid.place_vessel(c(1, 1), 2, Orientation::Horizontal));
    assert_eq!(grid.cell_state(c(1, 1), false), CellState::Water);
    assert_eq!(grid.cell_state(c(1, 1), true), CellState::ShipPresent);
    assert_eq!(grid.cell_state(c(0, 0), true), CellState::Water);
}

#[test]
fn test_available_shots_row_major() {
    let mut grid = Grid::new(3);
    assert_eq!(grid.available_shots().len(), 9);
    grid.receive_shot(c(1, 0));
    grid.receive_shot(c(0, 2));
    let shots = grid.available_shots();
    assert_eq!(
        shots,
        vec![c(0, 0), c(2, 0), c(0, 1), c(1, 1), c(2, 1), c(1, 2), c(2, 2)]
    );
}

#[test]
fn test_undo_last_placement_clears_cells_and_shots() {
    let mut grid = Grid::new(10);
    assert!(grid.place_vessel(c(0, 0), 2, Orientation::Horizontal));
    assert!(grid.place_vessel(c(5, 5), 3, Orientation::Vertical));
    grid.receive_shot(c(5, 6));

    let undone = grid.undo_last_placement().unwrap();
    assert_eq!(undone.length(), 3);
    assert_eq!(grid.vessels().len(), 1);
    for y in 5..8 {
        assert!(!grid.is_occupied(c(5, y)));
    }
    assert!(grid.shots().is_empty());
    // the freed space accepts a touching vessel again
    assert!(grid.place_vessel(c(4, 5), 3, Orientation::Vertical));

    grid.undo_last_placement();
    grid.undo_last_placement();
    assert!(grid.undo_last_placement().is_none());
}

#[test]
fn test_random_fleet_placement() {
    let mut grid = Grid::new(10);
    let mut rng = SmallRng::seed_from_u64(42);
    grid.place_fleet_randomly(&CANONICAL_FLEET, &mut rng).unwrap();
    let lengths: Vec<usize> = grid.vessels().iter().map(|v| v.length()).collect();
    assert_eq!(lengths, CANONICAL_FLEET.to_vec());

    // a second call starts from an empty board
    grid.place_fleet_randomly(&[2], &mut rng).unwrap();
    assert_eq!(grid.vessels().len(), 1);
}

#[test]
fn test_random_fleet_that_cannot_fit() {
    let mut grid = Grid::new(3);
    let mut rng = SmallRng::seed_from_u64(1);
    let err = grid.place_fleet_randomly(&[3, 3, 3], &mut rng).unwrap_err();
    assert_eq!(err, EngineError::UnableToPlaceVessel { length: 3 });

    let err = grid.place_fleet_randomly(&[4], &mut rng).unwrap_err();
    assert_eq!(err, EngineError::InvalidVesselLength { length: 4, size: 3 });
}
