use sea_battle::{Coord, Orientation, Vessel};

#[test]
fn test_footprint_and_contains() {
    let cells = Vessel::footprint(Coord::new(0, 0), 4, Orientation::Vertical);
    assert_eq!(
        cells,
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)]
    );
    let vessel = Vessel::new(cells);
    assert_eq!(vessel.length(), 4);
    assert!(vessel.contains(Coord::new(0, 3)));
    assert!(!vessel.contains(Coord::new(0, 4)));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut vessel = Vessel::new(Vessel::footprint(Coord::new(1, 1), 2, Orientation::Horizontal));
    assert!(!vessel.is_sunk());
    vessel.register_hit(Coord::new(1, 1));
    assert!(!vessel.is_sunk());
    // repeated hit on the same cell counts once
    vessel.register_hit(Coord::new(1, 1));
    assert!(!vessel.is_sunk());
    vessel.register_hit(Coord::new(2, 1));
    assert!(vessel.is_sunk());
    assert_eq!(vessel.hits().len(), vessel.length());
}

#[test]
fn test_hit_outside_footprint_is_ignored() {
    let mut vessel = Vessel::new(vec![Coord::new(5, 5)]);
    vessel.register_hit(Coord::new(5, 6));
    assert!(vessel.hits().is_empty());
    assert!(!vessel.is_sunk());
}
