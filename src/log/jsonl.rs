//! JSONL (JSON Lines) logging of draw history
//!
//! Provides append-only logging of draws to `.wichtel/draws.jsonl`. Records
//! describe how a draw was made, never who drew whom.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::emit::OutputType;
use crate::plan::PermutationPlan;

/// File name of the history inside the log directory
pub const LOG_FILE: &str = "draws.jsonl";

/// Describes a single draw
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawRecord {
    /// ISO 8601 timestamp of when the draw completed
    pub timestamp: DateTime<Utc>,
    /// Number of participants drawn
    pub participants: usize,
    /// The resolved plan the draw followed
    pub plan: PermutationPlan,
    /// Shuffle seed, if the draw was reproducible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Format of the written messages
    pub output_type: OutputType,
    /// Language of the written messages
    pub language: String,
    /// Directory the messages were written to
    pub output_dir: PathBuf,
    /// Number of files written (0 for a dry run)
    pub files_written: usize,
    /// True if nothing was written
    #[serde(default)]
    pub dry_run: bool,
}

/// JSONL logger for draw history
///
/// Each line is a JSON object representing a single draw.
pub struct DrawLog {
    log_path: PathBuf,
}

impl DrawLog {
    /// Create a new draw logger
    ///
    /// # Arguments
    /// * `log_dir` - Directory where draws.jsonl will be stored (typically `.wichtel`)
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self {
            log_path: log_dir.join(LOG_FILE),
        })
    }

    /// Append a draw record to the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The record cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, record: &DrawRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(record).context("Failed to serialize draw record to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all draw records from the log, oldest first
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any line cannot be parsed as valid JSON
    pub fn read_all(&self) -> Result<Vec<DrawRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: DrawRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
