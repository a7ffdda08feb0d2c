//! Index and element picking.

use rand::rngs::SmallRng;
use rand::seq::{SliceRandom, index};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{RandomError, Result};

/// Length used when the caller does not know the list size.
pub const DEFAULT_ARRAY_LENGTH: usize = 5;

/// Pick an index in `0..len`, reporting `0` as `1`.
///
/// Row 0 of a scraped list is conventionally a header, so it is never
/// returned. As a consequence `len <= 1` always yields `1`.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    if len == 0 {
        return 1;
    }
    rng.gen_range(0..len).max(1)
}

/// Pick `count` distinct numbers from `1..=length`, in random order.
///
/// `count` is clamped to `length`.
pub fn unique_indexes<R: Rng + ?Sized>(rng: &mut R, length: usize, count: usize) -> Vec<usize> {
    let count = count.min(length);
    index::sample(rng, length, count)
        .into_iter()
        .map(|idx| idx + 1)
        .collect()
}

/// Pick one element uniformly.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] when `items` is empty.
pub fn random_choice<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Result<&'a T> {
    items.choose(rng).ok_or(RandomError::InvalidArgument {
        reason: "choice set must not be empty",
    })
}

/// A random source bundled with the helpers.
#[derive(Debug, Clone)]
pub struct Randomizer<R = SmallRng> {
    rng: R,
}

impl Randomizer<SmallRng> {
    /// Reproducible picks from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "seeded randomizer");
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible picks seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl<R: Rng> Randomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// See [`random_index`].
    pub fn index(&mut self, len: usize) -> usize {
        random_index(&mut self.rng, len)
    }

    /// See [`unique_indexes`].
    pub fn unique_indexes(&mut self, length: usize, count: usize) -> Vec<usize> {
        unique_indexes(&mut self.rng, length, count)
    }

    /// See [`random_choice`].
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        random_choice(&mut self.rng, items)
    }
}

impl Default for Randomizer<SmallRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
