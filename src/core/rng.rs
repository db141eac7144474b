//! Deterministic random number generation for match sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore
//!
//! A hosting layer that persists `MatchState` between interactions gets the
//! RNG position back for free: restoring a snapshot continues the same
//! random sequence, so a replayed session stays byte-for-byte identical.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Largest fight bonus; power = attack + uniform integer in `[0, POWER_BONUS_MAX]`.
pub const POWER_BONUS_MAX: i64 = 10;

/// Deterministic RNG backing a match session.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "MatchRngState", into = "MatchRngState")]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fight bonus: uniform integer in `[0, POWER_BONUS_MAX]`, inclusive.
    pub fn bonus(&mut self) -> i64 {
        self.inner.gen_range(0..=POWER_BONUS_MAX)
    }

    /// Choose a random element from a slice.
    ///
    /// Returns `None` if the slice is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

impl From<MatchRngState> for MatchRng {
    fn from(state: MatchRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<MatchRng> for MatchRngState {
    fn from(rng: MatchRng) -> Self {
        rng.state()
    }
}
