//! Wichtel - secret santa draws
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use wichtel::cli::{render_draw_summary, render_error};
use wichtel::config::WichtelConfig;
use wichtel::draw::seed_from_arg;
use wichtel::log::DrawLog;
use wichtel::{run_draw, DrawOptions, OutputType};

const DEFAULT_CONFIG: &str = "wichtel.toml";

/// Secret santa draws along configurable gift cycles
///
/// Shuffles the participants, cuts them into gift cycles and writes one
/// message per gifter naming whom they give to.
#[derive(Parser, Debug)]
#[command(name = "wichtel", version, about)]
struct Cli {
    /// File with one participant name per line ('#' starts a comment)
    name_file: PathBuf,

    /// Directory for the output files, created if missing
    output_dir: PathBuf,

    /// Cycles as (size,count) tuples; -1 in one field is inferred, e.g. "(2,-1)"
    #[arg(long)]
    permutations: Option<String>,

    /// Format of the output files
    #[arg(long, value_enum)]
    output_type: Option<OutputType>,

    /// Shuffle seed for reproducible draws; negative means random
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Message language: english, german or one from the config file
    #[arg(long)]
    lang: Option<String>,

    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the draw history (.wichtel by default)
    #[arg(long, default_value = ".wichtel")]
    log_dir: PathBuf,

    /// Do not record the draw in the history
    #[arg(long)]
    no_log: bool,

    /// Resolve and draw, but write no files
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Merge flags over config defaults
    fn into_options(self, config: &WichtelConfig) -> DrawOptions {
        let mut options = DrawOptions::from_config(config, self.name_file, self.output_dir);
        if let Some(permutations) = self.permutations {
            options.permutations = permutations;
        }
        if let Some(output_type) = self.output_type {
            options.output_type = output_type;
        }
        if let Some(seed) = self.seed {
            options.seed = seed_from_arg(seed);
        }
        if let Some(lang) = self.lang {
            options.language = lang;
        }
        options.dry_run = self.dry_run;
        options
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = WichtelConfig::load(&config_path, cli.config.is_some())
        .with_context(|| format!("Failed to load config from '{}'", config_path.display()))?;

    let log_dir = (!cli.no_log).then(|| cli.log_dir.clone());
    let options = cli.into_options(&config);

    let outcome = run_draw(&options, &config)?;

    if let Some(log_dir) = log_dir {
        let log = DrawLog::new(&log_dir).context("Failed to initialize draw log")?;
        log.append(&outcome.record)
            .context("Failed to write to draw log")?;
    }

    render_draw_summary(&outcome.record);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            render_error(&err);
            ExitCode::FAILURE
        }
    }
}
