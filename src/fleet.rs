//! Random generation of legal fleet layouts.

use alloc::vec::Vec;
use core::fmt;
use log::trace;
use rand::Rng;

use crate::bitboard::FieldMask;
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Placement, Ship};

const ATTEMPTS_PER_SHIP: usize = 100;
const MAX_RESTARTS: usize = 50;

/// Errors returned by fleet generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// No legal layout was found within the attempt budget.
    UnableToPlace,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::UnableToPlace => write!(f, "Unable to lay out the fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

/// Returns placements for a complete fleet in which no two ships touch.
///
/// Ships go down longest first. A ship that cannot be fitted after a number
/// of tries abandons the layout and starts over.
pub fn random_placements<R: Rng>(rng: &mut R) -> Result<Vec<Placement>, FleetError> {
    for attempt in 1..=MAX_RESTARTS {
        if let Some(placements) = try_layout(rng) {
            return Ok(placements);
        }
        trace!("fleet layout attempt {} failed, starting over", attempt);
    }
    Err(FleetError::UnableToPlace)
}

fn try_layout<R: Rng>(rng: &mut R) -> Option<Vec<Placement>> {
    // Cells of placed ships plus their surroundings.
    let mut blocked = FieldMask::new();
    let mut placements = Vec::with_capacity(NUM_SHIPS);
    for class in FLEET.iter() {
        for _ in 0..class.count() {
            let (placement, mask) = (0..ATTEMPTS_PER_SHIP).find_map(|_| {
                let placement = random_placement(rng, class.length());
                let ship = Ship::new(placement.start, placement.end).ok()?;
                (ship.mask() & blocked)
                    .is_empty()
                    .then(|| (placement, ship.mask()))
            })?;
            blocked |= mask.halo();
            placements.push(placement);
        }
    }
    Some(placements)
}

/// A random in-bounds placement of a ship with `length` cells.
fn random_placement<R: Rng>(rng: &mut R, length: usize) -> Placement {
    let horizontal: bool = rng.random();
    let span = BOARD_SIZE - length;
    if horizontal {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..=span);
        Placement::new((row, col), (row, col + length - 1))
    } else {
        let row = rng.random_range(0..=span);
        let col = rng.random_range(0..BOARD_SIZE);
        Placement::new((row, col), (row + length - 1, col))
    }
}
