//! Ships, their cells, and how a placement expands into cells.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::FieldMask;
use crate::common::InvalidFieldError;
use crate::config::{BOARD_SIZE, MAX_SHIP_LEN};

/// A `(row, col)` position on the field.
pub type Coord = (usize, usize);

/// Orientation of a ship on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Single,
    Horizontal,
    Vertical,
}

/// A class of ship in the fleet: name, length and how many the fleet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// How many ships of this class a legal fleet carries.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Bow and stern of one ship, as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub start: Coord,
    pub end: Coord,
}

impl Placement {
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }

    /// A one-cell ship at `at`.
    pub const fn single(at: Coord) -> Self {
        Self { start: at, end: at }
    }
}

impl From<(Coord, Coord)> for Placement {
    fn from((start, end): (Coord, Coord)) -> Self {
        Self::new(start, end)
    }
}

/// One grid square occupied by a ship segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: true,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    /// `false` once the cell has been hit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// A straight run of 1 to [`MAX_SHIP_LEN`] cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Cell>,
    orientation: Orientation,
    mask: FieldMask,
    sunk: bool,
}

impl Ship {
    /// Expand a bow/stern pair into a ship.
    ///
    /// The ends may be given in either order. Fails if an end is off the
    /// field, the ends share neither row nor column, or the run is longer
    /// than [`MAX_SHIP_LEN`]. Fleet-wide rules are checked by the board.
    pub fn new(start: Coord, end: Coord) -> Result<Self, InvalidFieldError> {
        for (row, col) in [start, end] {
            if row >= BOARD_SIZE || col >= BOARD_SIZE {
                return Err(InvalidFieldError::OutOfBounds { row, col });
            }
        }

        let orientation = if start == end {
            Orientation::Single
        } else if start.0 == end.0 {
            Orientation::Horizontal
        } else if start.1 == end.1 {
            Orientation::Vertical
        } else {
            return Err(InvalidFieldError::NotStraight { start, end });
        };

        // Ends share a row or column, so tuple order is order along the run.
        let (bow, stern) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        let length = (stern.0 - bow.0) + (stern.1 - bow.1) + 1;
        if length > MAX_SHIP_LEN {
            return Err(InvalidFieldError::ShipTooLong { length });
        }

        let cells: Vec<Cell> = (0..length)
            .map(|i| match orientation {
                Orientation::Vertical => Cell::new(bow.0 + i, bow.1),
                _ => Cell::new(bow.0, bow.1 + i),
            })
            .collect();
        let mask = FieldMask::from_cells(cells.iter().map(Cell::coord))?;

        Ok(Ship {
            cells,
            orientation,
            mask,
            sunk: false,
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a ship has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells from bow to stern.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at (`row`, `col`), if this ship occupies it.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.contains(row, col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-most, left-most cell.
    pub fn bow(&self) -> Coord {
        self.cells[0].coord()
    }

    /// Bottom-most, right-most cell.
    pub fn stern(&self) -> Coord {
        self.cells[self.cells.len() - 1].coord()
    }

    /// Occupancy mask of the ship on the field.
    pub fn mask(&self) -> FieldMask {
        self.mask
    }

    /// Number of cells already hit.
    pub fn hits(&self) -> usize {
        self.cells.iter().filter(|c| !c.alive).count()
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Register a shot at (`row`, `col`) and return whether the ship is sunk.
    ///
    /// Shots at cells already dead, or outside the ship, leave it unchanged.
    pub fn fire(&mut self, row: usize, col: usize) -> bool {
        if self.sunk {
            return true;
        }
        let Some(cell) = self
            .cells
            .iter_mut()
            .find(|c| c.row == row && c.col == col)
        else {
            return false;
        };
        if !cell.alive {
            return false;
        }
        cell.alive = false;
        if self.cells.iter().all(|c| !c.alive) {
            self.sunk = true;
        }
        self.sunk
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: {:?}, stern: {:?}, orientation: {:?}, hits: {}, sunk: {} }}",
            self.bow(),
            self.stern(),
            self.orientation,
            self.hits(),
            self.sunk,
        )
    }
}
