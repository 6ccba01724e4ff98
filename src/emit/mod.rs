//! Assignment output
//!
//! Writes one file per gifter into the output directory, named after the
//! gifter and containing the rendered message for them.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::draw::Assignment;

pub mod message;
pub mod pdf;
pub mod text;

pub use message::MessageTemplate;
pub use pdf::PdfEmitter;
pub use text::TextEmitter;

/// Turns a rendered message into file content
pub trait Emitter {
    /// File extension without the dot
    fn extension(&self) -> &'static str;

    /// File content for one message
    fn render(&self, message: &str) -> Vec<u8>;
}

/// Output file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// Plain text, the message only
    Txt,
    /// A single PDF page sized to the message
    #[default]
    Pdf,
}

impl OutputType {
    /// The emitter producing this format
    #[must_use]
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            Self::Txt => Box::new(TextEmitter),
            Self::Pdf => Box::new(PdfEmitter),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Txt => f.write_str("txt"),
            Self::Pdf => f.write_str("pdf"),
        }
    }
}

/// Make a participant name usable as a file name.
///
/// Path separators, characters reserved on common filesystems and control
/// characters become `_`. Names that would be `.`/`..` or empty become `_`.
#[must_use]
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect();

    if stem.is_empty() || stem == "." || stem == ".." {
        "_".to_string()
    } else {
        stem
    }
}

/// Write every gifter's message into `dir`, creating it if needed.
///
/// File names are checked for collisions before anything is written.
/// Returns the written paths in draw order.
pub fn write_assignment(
    assignment: &Assignment,
    dir: &Path,
    emitter: &dyn Emitter,
    template: &MessageTemplate,
) -> Result<Vec<PathBuf>> {
    let planned = plan_paths(assignment, dir, emitter.extension())?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(planned.len());
    for (path, pairing) in planned.into_iter().zip(assignment) {
        let content = emitter.render(&template.render(pairing));
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

/// Output path for each pairing, in draw order
fn plan_paths(assignment: &Assignment, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut owners: HashMap<PathBuf, &str> = HashMap::new();
    let mut paths = Vec::with_capacity(assignment.len());

    for pairing in assignment {
        let path = dir.join(format!("{}.{extension}", file_stem(&pairing.gifter)));
        if let Some(other) = owners.insert(path.clone(), &pairing.gifter) {
            bail!(
                "Participants '{other}' and '{}' would both be written to {}",
                pairing.gifter,
                path.display()
            );
        }
        paths.push(path);
    }

    Ok(paths)
}
