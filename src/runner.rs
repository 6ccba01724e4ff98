//! Draw execution
//!
//! Composes loading, plan resolution, shuffling, drawing and output into
//! one run, and produces the record logged for it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::WichtelConfig;
use crate::draw::{draw, rng_for_seed, seed_from_arg, Assignment};
use crate::emit::{write_assignment, OutputType};
use crate::log::DrawRecord;
use crate::participants::load_participants;
use crate::plan::{parse_spec, resolve_plan};

/// Everything a run needs, after config and flags have been merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOptions {
    /// File with one participant name per line
    pub name_file: PathBuf,
    /// Directory receiving one file per gifter
    pub output_dir: PathBuf,
    /// Cycle specification, e.g. `(2,-1)`
    pub permutations: String,
    /// Output file format
    pub output_type: OutputType,
    /// Shuffle seed; `None` draws from entropy
    pub seed: Option<u64>,
    /// Message language
    pub language: String,
    /// Draw without writing any file
    pub dry_run: bool,
}

impl DrawOptions {
    /// Options from config defaults for the given input and output paths
    #[must_use]
    pub fn from_config(config: &WichtelConfig, name_file: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            name_file,
            output_dir,
            permutations: config.draw.permutations.clone(),
            output_type: config.draw.output_type,
            seed: config.draw.seed.and_then(seed_from_arg),
            language: config.draw.language.clone(),
            dry_run: false,
        }
    }
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    /// Who gives to whom
    pub assignment: Assignment,
    /// Files written, in draw order
    pub written: Vec<PathBuf>,
    /// History entry describing the run
    pub record: DrawRecord,
}

/// Execute a draw.
///
/// Fails before anything is written if the names, the specification or the
/// language are invalid.
pub fn run_draw(options: &DrawOptions, config: &WichtelConfig) -> Result<DrawOutcome> {
    let participants = load_participants(&options.name_file)?;

    let raw = parse_spec(&options.permutations)
        .with_context(|| format!("Invalid permutations '{}'", options.permutations))?;
    let plan = resolve_plan(&raw, participants.len()).with_context(|| {
        format!(
            "Cannot split {} participants along '{}'",
            participants.len(),
            options.permutations
        )
    })?;

    let template = config.message_template(&options.language)?;

    let mut rng = rng_for_seed(options.seed);
    let assignment = draw(&participants, &plan, &mut rng).context("Draw failed")?;

    let written = if options.dry_run {
        Vec::new()
    } else {
        let emitter = options.output_type.emitter();
        write_assignment(&assignment, &options.output_dir, emitter.as_ref(), &template)?
    };

    let record = DrawRecord {
        timestamp: Utc::now(),
        participants: participants.len(),
        plan,
        seed: options.seed,
        output_type: options.output_type,
        language: options.language.clone(),
        output_dir: options.output_dir.clone(),
        files_written: written.len(),
        dry_run: options.dry_run,
    };

    Ok(DrawOutcome {
        assignment,
        written,
        record,
    })
}
