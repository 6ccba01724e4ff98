//! Drawing
//!
//! Shuffling the participants and turning the shuffled list plus a
//! resolved plan into an [`Assignment`].

use rand::Rng;

use crate::error::DrawError;
use crate::plan::PermutationPlan;

pub mod cycle;
pub mod shuffle;

pub use cycle::{draw_cycles, Assignment, Pairing};
pub use shuffle::{rng_for_seed, seed_from_arg, shuffle_participants};

/// Shuffle `participants` with `rng` and draw along `plan`.
pub fn draw<R: Rng + ?Sized>(
    participants: &[String],
    plan: &PermutationPlan,
    rng: &mut R,
) -> Result<Assignment, DrawError> {
    let shuffled = shuffle_participants(participants, rng);
    draw_cycles(&shuffled, plan)
}
