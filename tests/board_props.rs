use battlefield::{random_placements, Board, Shot, BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::new(random_placements(&mut rng).unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_layouts_construct(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ships().len(), NUM_SHIPS);
        prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn water_always_misses(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        prop_assume!(board.ship_at(row, col).is_none());
        let before = board.render();
        prop_assert_eq!(board.fire(row, col), Shot::Miss);
        prop_assert_eq!(board.fire(row, col), Shot::Miss);
        prop_assert_eq!(board.render(), before);
    }

    #[test]
    fn last_cell_sinks(seed in any::<u64>(), pick in 0..NUM_SHIPS) {
        let mut board = random_board(seed);
        let cells: Vec<_> = board.ships()[pick].cells().iter().map(|c| c.coord()).collect();
        let (last, rest) = cells.split_last().unwrap();
        for &cell in rest {
            prop_assert_eq!(board.fire_at(cell), Shot::Hit);
            // a second shot at a dead cell never sinks the ship
            prop_assert_eq!(board.fire_at(cell), Shot::Hit);
        }
        prop_assert_eq!(board.fire_at(*last), Shot::Sunk);
        prop_assert!(board.ships()[pick].is_sunk());
        prop_assert_eq!(board.ships_afloat(), NUM_SHIPS - 1);
    }

    #[test]
    fn shots_only_touch_their_ship(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let before: Vec<_> = board.ships().to_vec();
        board.fire(row, col);
        let changed = board
            .ships()
            .iter()
            .zip(&before)
            .filter(|(now, then)| now != then)
            .count();
        prop_assert!(changed <= 1);
        prop_assert_eq!(changed == 1, board.ship_at(row, col).is_some());
    }
}
