//! Randomness sources for player placement and treasure relocation.
//!
//! The engine never talks to an RNG directly; it goes through the
//! [`RandomSource`] trait so tests can substitute a deterministic source.
//!
//! ## Sources
//!
//! - [`GameRng`]: seeded ChaCha8. Deterministic, serializable, the source
//!   tests and simulations should use.
//! - [`ChainEntropy`]: hash-mix of caller-visible chain metadata (timestamp,
//!   caller, nonce). This reproduces the original contract's randomness and
//!   inherits its weakness: the sequence is fully predictable to anyone who
//!   can observe or influence block metadata. That is an accepted property
//!   of the design, not something this crate attempts to fix.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::address::Address;

/// Uniform random draws in a caller-chosen range.
///
/// `next_in_range(n)` returns a value in `[0, n)`. The engine only ever asks
/// for grid-sized ranges, so `u32` is plenty.
pub trait RandomSource {
    /// Draw a uniform value in `[0, n)`. `n` must be nonzero.
    fn next_in_range(&mut self, n: u32) -> u32;
}

/// Deterministic RNG backed by ChaCha8.
///
/// Same seed, same sequence. State can be captured and restored in O(1)
/// via [`GameRng::state`] / [`GameRng::from_state`].
///
/// ```
/// use treasure_hunt::core::{GameRng, RandomSource};
///
/// let mut a = GameRng::new(42);
/// let mut b = GameRng::new(42);
/// assert_eq!(a.next_in_range(100), b.next_in_range(100));
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_in_range(&mut self, n: u32) -> u32 {
        self.inner.gen_range(0..n)
    }
}

/// Serializable RNG state for checkpointing.
///
/// The ChaCha8 word position makes capture O(1) no matter how many draws
/// have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Pseudo-randomness derived from chain metadata, as the original contract
/// computed it: a hash over the block timestamp, the acting caller, and an
/// internal nonce bumped on every draw.
///
/// **Not cryptographically secure.** A caller who controls or predicts block
/// production can steer every draw. Use [`GameRng`] anywhere that matters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainEntropy {
    timestamp: u64,
    caller: Address,
    nonce: u64,
}

impl ChainEntropy {
    /// Create a source from the current block timestamp and acting caller.
    #[must_use]
    pub fn new(timestamp: u64, caller: Address) -> Self {
        Self {
            timestamp,
            caller,
            nonce: 0,
        }
    }

    /// Update the block metadata, as the host would between calls.
    pub fn observe_block(&mut self, timestamp: u64, caller: Address) {
        self.timestamp = timestamp;
        self.caller = caller;
    }
}

impl RandomSource for ChainEntropy {
    fn next_in_range(&mut self, n: u32) -> u32 {
        use std::collections::hash_map::DefaultHasher;

        self.nonce += 1;
        let mut hasher = DefaultHasher::new();
        self.timestamp.hash(&mut hasher);
        self.caller.hash(&mut hasher);
        self.nonce.hash(&mut hasher);
        (hasher.finish() % u64::from(n)) as u32
    }
}
