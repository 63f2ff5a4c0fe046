//! Common types for the battlefield: shot outcomes and field errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::Coord;

/// Outcome of a shot at the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    /// No ship occupies the target.
    Miss,
    /// The target belongs to a ship that is still afloat.
    Hit,
    /// The target belongs to a ship with no cells left alive.
    Sunk,
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shot::Miss => "Miss",
            Shot::Hit => "Hit",
            Shot::Sunk => "Sunk",
        })
    }
}

/// Reasons a list of ship placements does not form a legal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFieldError {
    /// Underlying grid error.
    Grid(BitBoardError),
    /// A ship end lies outside the field.
    OutOfBounds { row: usize, col: usize },
    /// Bow and stern share neither a row nor a column.
    NotStraight { start: Coord, end: Coord },
    /// Ship is longer than any class in the fleet.
    ShipTooLong { length: usize },
    /// Wrong number of ships.
    ShipCount { expected: usize, found: usize },
    /// Two ships claim the same cell.
    Overlap { row: usize, col: usize },
    /// Wrong number of ships of a given length.
    Composition {
        length: usize,
        expected: usize,
        found: usize,
    },
    /// Two ships touch, sideways or diagonally. Indices follow placement order.
    Touching { first: usize, second: usize },
}

impl From<BitBoardError> for InvalidFieldError {
    fn from(err: BitBoardError) -> Self {
        InvalidFieldError::Grid(err)
    }
}

impl fmt::Display for InvalidFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Incorrect ship coordinates in the passed list: ")?;
        match self {
            InvalidFieldError::Grid(e) => write!(f, "{}", e),
            InvalidFieldError::OutOfBounds { row, col } => {
                write!(f, "({}, {}) is off the field", row, col)
            }
            InvalidFieldError::NotStraight { start, end } => write!(
                f,
                "ship from {:?} to {:?} is neither horizontal nor vertical",
                start, end
            ),
            InvalidFieldError::ShipTooLong { length } => {
                write!(f, "ship of length {} is too long", length)
            }
            InvalidFieldError::ShipCount { expected, found } => {
                write!(f, "expected {} ships, found {}", expected, found)
            }
            InvalidFieldError::Overlap { row, col } => {
                write!(f, "more than one ship occupies ({}, {})", row, col)
            }
            InvalidFieldError::Composition {
                length,
                expected,
                found,
            } => write!(
                f,
                "expected {} ships of length {}, found {}",
                expected, length, found
            ),
            InvalidFieldError::Touching { first, second } => {
                write!(f, "ships #{} and #{} touch", first, second)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidFieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidFieldError::Grid(e) => Some(e),
            _ => None,
        }
    }
}
