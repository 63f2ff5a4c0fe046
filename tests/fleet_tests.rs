use battlefield::{random_placements, Board, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_random_fleet_is_legal() {
    let mut rng = SmallRng::seed_from_u64(42);
    let placements = random_placements(&mut rng).unwrap();
    assert_eq!(placements.len(), NUM_SHIPS);

    let board = Board::new(placements).unwrap();
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    for class in FLEET {
        let found = board
            .ships()
            .iter()
            .filter(|s| s.len() == class.length())
            .count();
        assert_eq!(found, class.count(), "{}", class.name());
    }
}

#[test]
fn test_random_fleet_is_reproducible() {
    let a = random_placements(&mut SmallRng::seed_from_u64(7)).unwrap();
    let b = random_placements(&mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_ship_class_lookup() {
    let class = battlefield::ship_class_for_len(3).unwrap();
    assert_eq!(class.name(), "Cruiser");
    assert_eq!(class.count(), 2);
    assert!(battlefield::ship_class_for_len(5).is_none());
}
