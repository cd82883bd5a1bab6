//! # treasure-hunt
//!
//! A turn-based betting game engine on a 10×10 grid. Players pay an entry
//! bet to join a round, then take turns stepping a token one cell at a time,
//! trying to land on a moving treasure cell. Landing on the treasure ends the
//! round: the winner takes 90% of the pooled bets and the remaining 10%
//! accrues to the owner as fees.
//!
//! The crate is the pure state machine of the original on-chain game. The
//! hosting environment is modeled as two injected capabilities:
//!
//! - caller identity and attached value arrive as explicit parameters;
//! - outgoing value moves through the [`Bank`] trait, which fails atomically
//!   or succeeds.
//!
//! ## Design Principles
//!
//! 1. **Single owned state**: all game data lives in one [`GameState`] passed
//!    by exclusive reference; no globals. Hosts without serialized execution
//!    must wrap the engine in a single lock or actor.
//!
//! 2. **All-or-nothing operations**: every entry operation fully applies or
//!    fully rejects. Transfer failures roll the triggering operation back.
//!
//! 3. **Injected randomness**: the engine draws through [`RandomSource`].
//!    [`ChainEntropy`] reproduces the original's predictable chain-metadata
//!    randomness; [`GameRng`] gives tests a seeded deterministic source.
//!
//! ## Modules
//!
//! - `core`: identity, grid geometry, randomness, value transfer
//! - `engine`: game state, events, errors, and the entry operations
//!
//! ## Example
//!
//! ```
//! use treasure_hunt::{Address, Direction, GameRng, InMemoryBank, TreasureHunt, MINIMUM_BET};
//!
//! let owner = Address::new(0);
//! let alice = Address::new(1);
//!
//! let mut bank = InMemoryBank::new();
//! let mut game = TreasureHunt::new(owner, GameRng::new(42));
//!
//! game.join_game(alice, MINIMUM_BET).unwrap();
//! assert_eq!(game.state().total_players(), 1);
//! assert_eq!(game.state().current_player(), Some(alice));
//!
//! // A boundary-crossing move is a successful call that emits InvalidMove,
//! // so submitting blind from a random start never errors.
//! game.submit_move(&mut bank, alice, Direction::Up).unwrap();
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Address, Amount, Bank, ChainEntropy, Direction, GameRng, GameRngState, InMemoryBank,
    Position, RandomSource, TransferError, GRID_CELLS, GRID_SIZE,
};

pub use crate::engine::{
    EventBatch, EventRecord, GameError, GameEvent, GameState, PlayerState, RoundState,
    TreasureHunt, MINIMUM_BET, WINNER_SHARE_PERCENT,
};
