//! Wichtel - secret santa draws
//!
//! Assigns every participant of a group another participant to give a gift
//! to. The shuffled group is cut into gift cycles whose sizes and counts the
//! caller chooses; inside a cycle everyone gives to the next person, so
//! nobody ever draws themself.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod draw;
pub mod emit;
pub mod error;
pub mod log;
pub mod participants;
pub mod plan;
pub mod runner;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use config::WichtelConfig;
pub use draw::{draw, draw_cycles, rng_for_seed, shuffle_participants, Assignment, Pairing};
pub use emit::{MessageTemplate, OutputType};
pub use error::{DrawError, ParticipantError, PlanError, SpecParseError};
pub use log::{DrawLog, DrawRecord};
pub use plan::{parse_spec, resolve_plan, CycleGroup, CycleSpec, PermutationPlan};
pub use runner::{run_draw, DrawOptions, DrawOutcome};
