//! Game state: one round, its players, and the owner's fee balance.
//!
//! All mutation goes through the engine in
//! [`game`](super::game); this module owns the data layout, the read-only
//! accessors, and binary snapshotting.
//!
//! ## Reimplementation note
//!
//! The original stores all of this in contract storage, serialized by the
//! chain. Here it is a single owned struct: callers hold it exclusively, and
//! anything outside a serialized host (a simulation server, say) must put a
//! single lock or actor in front of it, because the invariants (turn-index
//! validity, pot/fee consistency) do not survive unserialized mutation.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{EventRecord, GameEvent};
use crate::core::{Address, Amount, Position};

/// Minimum entry bet: 0.01 native-currency units at wei scale.
pub const MINIMUM_BET: Amount = 10_000_000_000_000_000;

/// Winner's share of the pot, in percent. The remainder accrues to fees.
pub const WINNER_SHARE_PERCENT: Amount = 90;

/// Per-player state for the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current cell.
    pub position: Position,
    /// True from join until the round ends.
    pub active: bool,
}

/// The current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Monotonically increasing round counter, starting at 1.
    pub number: u64,
    /// Whether the round is accepting joins and moves.
    pub active: bool,
    /// The treasure cell. Kept across round end; re-randomized on round start.
    pub treasure: Position,
    /// Accumulated bets for this round.
    pub pot: Amount,
}

/// Complete engine state.
///
/// Cloning is cheap (the history log is a persistent `im::Vector`), which is
/// what makes the engine's snapshot-and-restore failure atomicity practical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) owner: Address,
    pub(crate) round: RoundState,
    /// Fees owed to the owner; survives round boundaries until withdrawn.
    pub(crate) accrued_fees: Amount,
    pub(crate) players: FxHashMap<Address, PlayerState>,
    /// Join order for the current round.
    pub(crate) turn_order: Vec<Address>,
    /// Index into `turn_order`; always points at an active player while
    /// `total_players > 0`.
    pub(crate) current_turn: usize,
    /// Count of `active == true` players.
    pub(crate) total_players: u32,
    pub(crate) history: Vector<EventRecord>,
    pub(crate) next_sequence: u64,
}

impl GameState {
    pub(crate) fn new(owner: Address, treasure: Position) -> Self {
        Self {
            owner,
            round: RoundState {
                number: 1,
                active: true,
                treasure,
                pot: 0,
            },
            accrued_fees: 0,
            players: FxHashMap::default(),
            turn_order: Vec::new(),
            current_turn: 0,
            total_players: 0,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Append an event to the history log.
    pub(crate) fn record_event(&mut self, event: GameEvent) {
        let record = EventRecord {
            round: self.round.number,
            sequence: self.next_sequence,
            event,
        };
        self.next_sequence += 1;
        self.history.push_back(record);
    }

    // === Read-only observers ===

    /// The deploying owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u64 {
        self.round.number
    }

    /// Whether the round is in progress.
    #[must_use]
    pub fn round_active(&self) -> bool {
        self.round.active
    }

    /// Current treasure cell.
    #[must_use]
    pub fn treasure_position(&self) -> Position {
        self.round.treasure
    }

    /// Accumulated bets for the current round.
    #[must_use]
    pub fn pot(&self) -> Amount {
        self.round.pot
    }

    /// Fees owed to the owner.
    #[must_use]
    pub fn accrued_fees(&self) -> Amount {
        self.accrued_fees
    }

    /// Count of active players in the current round.
    #[must_use]
    pub fn total_players(&self) -> u32 {
        self.total_players
    }

    /// Whether the address joined the current round.
    #[must_use]
    pub fn is_player_active(&self, address: Address) -> bool {
        self.players.get(&address).is_some_and(|p| p.active)
    }

    /// A player's cell, if they have one.
    #[must_use]
    pub fn player_position(&self, address: Address) -> Option<Position> {
        self.players.get(&address).map(|p| p.position)
    }

    /// The player whose turn it is, while the round has players.
    #[must_use]
    pub fn current_player(&self) -> Option<Address> {
        if self.total_players == 0 {
            None
        } else {
            self.turn_order.get(self.current_turn).copied()
        }
    }

    /// Every event emitted so far, stamped with round and sequence.
    #[must_use]
    pub fn event_history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    // === Snapshots ===

    /// Serialize to a compact binary snapshot.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore from a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
