//! Magic number providers.
//!
//! The engine itself is deterministic; randomness lives here, behind
//! `MagicNumberSource`, and is handed to the engine as a `MagicNumber`.
//!
//! ## Reproducible draws
//!
//! A seeded `MashRng` replays the same magic numbers. A session of several
//! games forks one stream per game, so replaying game three does not need
//! the draws of games one and two.
//!
//! ```
//! use mash::core::{MagicNumberSource, MashRng};
//!
//! let mut rng1 = MashRng::new(42);
//! let mut rng2 = MashRng::new(42);
//!
//! // Same seed, same magic numbers
//! assert_eq!(rng1.next_magic_number(), rng2.next_magic_number());
//!
//! // Same session seed, same per-game streams
//! let mut game1 = rng1.fork();
//! let mut game2 = rng2.fork();
//! assert_eq!(game1.next_magic_number(), game2.next_magic_number());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::magic::{MagicNumber, MAGIC_NUMBER_MAX, MAGIC_NUMBER_MIN};

/// Anything that can hand out magic numbers.
pub trait MagicNumberSource {
    /// Draw the next magic number, uniformly in `[2, 10]`.
    fn next_magic_number(&mut self) -> MagicNumber;
}

/// Deterministic magic number provider backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct MashRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl MashRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Derive the stream for the next game of a session.
    ///
    /// The n-th fork of a given seed is always the same stream, and differs
    /// from the parent and from every other fork.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Position in the stream, for resuming a session later.
    #[must_use]
    pub fn state(&self) -> MashRngState {
        MashRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume a session from a saved position.
    #[must_use]
    pub fn from_state(state: &MashRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl MagicNumberSource for MashRng {
    fn next_magic_number(&mut self) -> MagicNumber {
        draw(&mut self.inner)
    }
}

/// Non-reproducible provider using the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadMagicNumbers;

impl MagicNumberSource for ThreadMagicNumbers {
    fn next_magic_number(&mut self) -> MagicNumber {
        draw(&mut rand::thread_rng())
    }
}

fn draw<R: Rng>(rng: &mut R) -> MagicNumber {
    MagicNumber::from_drawn(rng.gen_range(MAGIC_NUMBER_MIN..=MAGIC_NUMBER_MAX))
}

/// Saved position of a `MashRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MashRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Games forked so far
    pub fork_counter: u64,
}
