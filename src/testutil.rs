//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::path::PathBuf;

use chrono::Utc;

use crate::emit::OutputType;
use crate::log::jsonl::DrawRecord;
use crate::plan::{CycleGroup, PermutationPlan};

/// Owned participant names from string literals
#[must_use]
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Create a minimal `DrawRecord` for testing with sensible defaults.
///
/// One cycle through all `participants`, seed 42, text output in english.
#[must_use]
pub fn make_test_record(participants: usize) -> DrawRecord {
    DrawRecord {
        timestamp: Utc::now(),
        participants,
        plan: PermutationPlan::from_groups(vec![CycleGroup::new(participants, 1)]),
        seed: Some(42),
        output_type: OutputType::Txt,
        language: "english".to_string(),
        output_dir: PathBuf::from("out"),
        files_written: participants,
        dry_run: false,
    }
}
