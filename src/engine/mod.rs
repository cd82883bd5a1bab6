//! The game state machine: state, events, errors, and the entry operations.

pub mod error;
pub mod event;
pub mod game;
pub mod state;

pub use error::GameError;
pub use event::{EventBatch, EventRecord, GameEvent};
pub use game::TreasureHunt;
pub use state::{GameState, PlayerState, RoundState, MINIMUM_BET, WINNER_SHARE_PERCENT};
