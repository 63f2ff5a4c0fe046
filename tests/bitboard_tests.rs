use battlefield::{BitBoard, BitBoardError, FieldMask};

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());

    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert!(!bb.contains(0, 9));
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_halo_in_the_middle() {
    let bb = FieldMask::from_cells([(4, 4), (4, 5)]).unwrap();
    let halo = bb.halo();
    assert_eq!(halo.count_ones(), 12);
    for (r, c) in [(3, 3), (3, 6), (5, 3), (5, 6), (4, 4)] {
        assert!(halo.contains(r, c));
    }
    assert!(!halo.contains(4, 7));
}

#[test]
fn test_halo_clipped_at_corner() {
    let bb = FieldMask::from_cells([(9, 9)]).unwrap();
    let halo = bb.halo();
    let bits: Vec<_> = halo.iter_set_bits().collect();
    assert_eq!(bits, vec![(8, 8), (8, 9), (9, 8), (9, 9)]);
}

#[test]
fn test_complement_stays_on_grid() {
    let bb = BitBoard::<u32, 3>::from_cells([(0, 0)]).unwrap();
    assert_eq!((!bb).count_ones(), 8);
    assert!((bb & !bb).is_empty());
    assert_eq!((bb | !bb).count_ones(), 9);
}
