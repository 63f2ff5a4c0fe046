//! A fixed-size occupancy grid packed into an unsigned integer.
//!
//! The board keeps its fleet mask and shot history in these, and placement
//! validation uses [`BitBoard::halo`] to find ships that touch.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;

/// Mask covering the whole playing field.
pub type FieldMask = BitBoard<u128, BOARD_SIZE>;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is outside `0..N`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// An N×N set of cells stored in the bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }

    /// An empty grid.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Builds a grid from `(row, col)` positions.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (row, col) in cells {
            board.set(row, col)?;
        }
        Ok(board)
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether (`row`, `col`) is occupied.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Like [`get`](Self::get), but treats off-grid cells as empty.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Marks (`row`, `col`) as occupied.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// The occupied cells together with every cell in their 8-neighbourhood,
    /// clipped to the grid.
    pub fn halo(&self) -> Self {
        let mut out = *self;
        for (row, col) in self.iter_set_bits() {
            for r in row.saturating_sub(1)..=(row + 1).min(N - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(N - 1) {
                    out.bits = out.bits | (T::one() << (r * N + c));
                }
            }
        }
        out
    }

    /// Iterator over occupied cells in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(r, c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the occupied cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the grid bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
