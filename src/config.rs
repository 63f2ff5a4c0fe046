use crate::ship::ShipClass;

/// Side length of the square playing field.
pub const BOARD_SIZE: usize = 10;
/// Longest ship allowed on the field.
pub const MAX_SHIP_LEN: usize = 4;
/// Number of distinct ship classes in [`FLEET`].
pub const NUM_CLASSES: usize = 4;

/// Required fleet, longest class first.
pub const FLEET: [ShipClass; NUM_CLASSES] = [
    ShipClass::new("Battleship", 4, 1),
    ShipClass::new("Cruiser", 3, 2),
    ShipClass::new("Destroyer", 2, 3),
    ShipClass::new("Boat", 1, 4),
];

/// Total number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 1 + 2 + 3 + 4;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Look up the fleet class for a ship of `length` cells. Returns `None` if no
/// class in [`FLEET`] has that length.
pub fn ship_class_for_len(length: usize) -> Option<ShipClass> {
    FLEET.iter().copied().find(|class| class.length() == length)
}
