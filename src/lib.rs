//! Single-player Battleship field: ship placement, layout validation and
//! shot resolution on a 10x10 grid.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, FieldMask, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{random_placements, FleetError};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ship::*;
