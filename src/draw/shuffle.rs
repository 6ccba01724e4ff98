//! Participant shuffling
//!
//! The random source is always passed in. Use [`rng_for_seed`] to get a
//! reproducible generator for a seed, or an entropy-seeded one without.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Build the random source for a run.
///
/// `Some(seed)` gives a generator whose stream depends only on the seed;
/// `None` seeds from operating system entropy.
#[must_use]
pub fn rng_for_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Interpret a command line seed: negative values mean "no seed".
#[must_use]
pub fn seed_from_arg(raw: i64) -> Option<u64> {
    u64::try_from(raw).ok()
}

/// Return a uniformly shuffled copy of `participants` (Fisher-Yates).
pub fn shuffle_participants<T: Clone, R: Rng + ?Sized>(participants: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = participants.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
