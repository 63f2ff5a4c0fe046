//! The playing field: owns the fleet, indexes cells and resolves shots.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};
use log::{debug, warn};

use crate::bitboard::FieldMask;
use crate::common::{InvalidFieldError, Shot};
use crate::config::{ship_class_for_len, BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Coord, Placement, Ship};

/// Untouched water.
pub const WATER: char = '~';
/// Ship cell that has not been hit.
pub const AFLOAT: char = '\u{25A1}';
/// Hit cell of a ship that is still afloat.
pub const DAMAGED: char = '*';
/// Cell of a sunk ship.
pub const SUNK: char = 'x';

/// A validated field of ships together with the shots fired at it.
#[derive(Clone)]
pub struct Board {
    ships: Vec<Ship>,
    field: BTreeMap<Coord, usize>,
    ship_map: FieldMask,
    hits: FieldMask,
    misses: FieldMask,
}

impl Board {
    /// Build a field from one placement per ship.
    ///
    /// Each placement becomes a [`Ship`] whose cells are indexed by
    /// coordinate. A later ship claiming a cell takes it over; the clash is
    /// then reported as [`InvalidFieldError::Overlap`] by validation. The
    /// finished layout must hold exactly the ships listed in
    /// [`FLEET`](crate::FLEET) with no two of them touching.
    pub fn new<I, P>(placements: I) -> Result<Self, InvalidFieldError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Placement>,
    {
        let board = Self::layout(placements).and_then(|board| {
            board.validate()?;
            Ok(board)
        });
        match &board {
            Ok(board) => debug!("field accepted with {} ships:\n{}", board.ships.len(), board),
            Err(err) => warn!("field rejected: {}", err),
        }
        board
    }

    fn layout<I, P>(placements: I) -> Result<Self, InvalidFieldError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Placement>,
    {
        let mut ships = Vec::with_capacity(NUM_SHIPS);
        let mut field = BTreeMap::new();
        let mut ship_map = FieldMask::new();
        for (index, placement) in placements.into_iter().enumerate() {
            let placement = placement.into();
            let ship = Ship::new(placement.start, placement.end)?;
            for cell in ship.cells() {
                field.insert(cell.coord(), index);
            }
            ship_map |= ship.mask();
            ships.push(ship);
        }
        Ok(Board {
            ships,
            field,
            ship_map,
            hits: FieldMask::new(),
            misses: FieldMask::new(),
        })
    }

    fn validate(&self) -> Result<(), InvalidFieldError> {
        if self.ships.len() != NUM_SHIPS {
            return Err(InvalidFieldError::ShipCount {
                expected: NUM_SHIPS,
                found: self.ships.len(),
            });
        }

        // A cell whose final owner is someone else was claimed twice.
        for (index, ship) in self.ships.iter().enumerate() {
            for cell in ship.cells() {
                if self.field.get(&cell.coord()) != Some(&index) {
                    return Err(InvalidFieldError::Overlap {
                        row: cell.row(),
                        col: cell.col(),
                    });
                }
            }
        }

        for class in FLEET.iter() {
            let found = self
                .ships
                .iter()
                .filter(|s| s.len() == class.length())
                .count();
            if found != class.count() {
                return Err(InvalidFieldError::Composition {
                    length: class.length(),
                    expected: class.count(),
                    found,
                });
            }
        }

        for (index, ship) in self.ships.iter().enumerate() {
            let others = self.ship_map & !ship.mask();
            let touching = ship.mask().halo() & others;
            if let Some(at) = touching.iter_set_bits().next() {
                if let Some(&other) = self.field.get(&at) {
                    return Err(InvalidFieldError::Touching {
                        first: index.min(other),
                        second: index.max(other),
                    });
                }
            }
        }

        Ok(())
    }

    /// Fire at (`row`, `col`).
    ///
    /// Returns [`Shot::Miss`] for water and off-field targets. Otherwise the
    /// owning ship takes the hit and the result reflects whether it is now
    /// sunk. Repeated shots at the same cell change nothing.
    pub fn fire(&mut self, row: usize, col: usize) -> Shot {
        let Some(&index) = self.field.get(&(row, col)) else {
            let _ = self.misses.set(row, col);
            debug!("shot at ({}, {}): {}", row, col, Shot::Miss);
            return Shot::Miss;
        };
        let _ = self.hits.set(row, col);
        let shot = if self.ships[index].fire(row, col) {
            Shot::Sunk
        } else {
            Shot::Hit
        };
        let class = ship_class_for_len(self.ships[index].len()).map_or("ship", |c| c.name());
        debug!("shot at ({}, {}): {} ({} #{})", row, col, shot, class, index);
        shot
    }

    /// Tuple form of [`fire`](Self::fire).
    pub fn fire_at(&mut self, (row, col): Coord) -> Shot {
        self.fire(row, col)
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.field.get(&(row, col)).map(|&index| &self.ships[index])
    }

    /// Occupancy mask of the whole fleet.
    pub fn ship_map(&self) -> FieldMask {
        self.ship_map
    }

    /// Cells fired at that held a ship.
    pub fn hits(&self) -> FieldMask {
        self.hits
    }

    /// Cells fired at that held water.
    pub fn misses(&self) -> FieldMask {
        self.misses
    }

    /// Number of distinct on-field cells fired at.
    pub fn shots_fired(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }

    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Text snapshot of the field; see the [`Display`](fmt::Display) impl.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn glyph(&self, row: usize, col: usize) -> char {
        let Some(ship) = self.ship_at(row, col) else {
            return WATER;
        };
        match ship.cell(row, col) {
            Some(cell) if cell.is_alive() => AFLOAT,
            _ if ship.is_sunk() => SUNK,
            _ => DAMAGED,
        }
    }
}

/// One line per row, cells separated by tabs.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_char('\t')?;
                }
                f.write_char(self.glyph(row, col))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
