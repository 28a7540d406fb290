//! Deterministic random number generation for distribution and rotation.
//!
//! Every shuffle the engine performs (card distribution, language rotation,
//! random card sampling) goes through [`SessionRng`], so a session built from
//! a fixed seed reproduces the same roster and rotation order on every run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG for a single session.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
/// The same seed always produces the identical sequence of shuffles.
#[derive(Clone, Debug)]
pub struct SessionRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SessionRng {
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

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniformly shuffle a slice in place (Fisher-Yates via `rand`).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Sample `n` distinct elements from a slice, in random order.
    ///
    /// Returns fewer than `n` elements if the slice is shorter than `n`.
    #[must_use]
    pub fn sample<'a, T>(&mut self, slice: &'a [T], n: usize) -> Vec<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.inner, n).collect()
    }

    /// Generate a fixed-width decimal digit string (for card IDs).
    #[must_use]
    pub fn digits(&mut self, width: usize) -> String {
        (0..width)
            .map(|_| char::from(b'0' + self.inner.gen_range(0..10u8)))
            .collect()
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> SessionRngState {
        SessionRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &SessionRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
