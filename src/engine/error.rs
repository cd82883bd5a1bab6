//! Engine errors.
//!
//! Every error rejects the whole attempted operation; no partial state
//! mutation is observable on failure. An out-of-bounds move is deliberately
//! *not* an error — it is a successful call that emits
//! [`GameEvent::InvalidMove`](super::event::GameEvent::InvalidMove) and
//! leaves the turn where it was.

use thiserror::Error;

use crate::core::TransferError;

/// Reasons an entry operation can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Bet below the minimum entry threshold.
    #[error("insufficient bet amount")]
    InsufficientBet,

    /// Caller already joined the current round.
    #[error("already joined")]
    AlreadyJoined,

    /// Operation requires an active round.
    #[error("game is not active")]
    RoundNotActive,

    /// `start_new_game` requires the previous round to have ended.
    #[error("previous game still in progress")]
    RoundStillActive,

    /// Caller is not the player at the current turn index.
    #[error("not your turn")]
    NotYourTurn,

    /// Caller has not joined the current round.
    #[error("player not active")]
    PlayerNotActive,

    /// Owner-only operation called by a non-owner.
    #[error("only owner can do this")]
    Unauthorized,

    /// The outgoing value transfer was rejected; state was rolled back.
    #[error("payout failed: {0}")]
    TransferFailed(#[from] TransferError),
}
