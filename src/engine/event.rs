//! Observable game events.
//!
//! Every entry operation returns the batch of events it emitted, in emission
//! order, and the same events are appended to the state's history log with a
//! round stamp and a global sequence number. The variants mirror the original
//! contract's event surface one to one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Address, Amount, Direction, Position};

/// Events emitted by entry operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A valid move was applied.
    PlayerMoved {
        player: Address,
        from: Position,
        to: Position,
        direction: Direction,
    },

    /// A move would have crossed a boundary; position and turn are unchanged
    /// and the same player must resubmit.
    InvalidMove { player: Address, direction: Direction },

    /// The treasure relocated after a divisible-by-5 or prime landing.
    TreasureMoved { from: Position, to: Position },

    /// The turn passed to (or started with) this player.
    NextTurn { player: Address },

    /// A player landed on the treasure; the round is over.
    GameWon { winner: Address, reward: Amount },

    /// A new round began.
    NewRound { round: u64, treasure: Position },

    /// The owner withdrew the accrued fee balance.
    FeesWithdrawn { owner: Address, amount: Amount },
}

/// Events emitted by a single operation.
///
/// A move emits at most three (movement, treasure relocation, turn advance),
/// so batches stay on the stack.
pub type EventBatch = SmallVec<[GameEvent; 3]>;

/// A history entry: an event stamped with the round it happened in and a
/// monotonically increasing sequence number across the instance's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Round the event belongs to.
    pub round: u64,
    /// Position in the instance-wide emission order.
    pub sequence: u64,
    /// The event itself.
    pub event: GameEvent,
}
