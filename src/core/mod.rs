//! Core types: identity, grid geometry, randomness, value transfer.
//!
//! These are the building blocks the game engine is assembled from. Nothing
//! in here knows about rounds, turns, or treasure rules.

pub mod address;
pub mod bank;
pub mod grid;
pub mod rng;

pub use address::Address;
pub use bank::{Amount, Bank, InMemoryBank, TransferError};
pub use grid::{Direction, Position, GRID_CELLS, GRID_SIZE};
pub use rng::{ChainEntropy, GameRng, GameRngState, RandomSource};
