//! Participant list loading
//!
//! One name per line. Surrounding whitespace is trimmed, blank lines and
//! lines starting with `#` are skipped. Names must be unique.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ParticipantError;

/// Read and parse a participant file
pub fn load_participants<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read name file: {}", path.display()))?;
    parse_participants(&content)
        .with_context(|| format!("Invalid name file: {}", path.display()))
}

/// Parse participant names from file content, keeping file order.
pub fn parse_participants(content: &str) -> Result<Vec<String>, ParticipantError> {
    let mut names = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, line) in content.lines().enumerate() {
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }

        let line = index + 1;
        if let Some(&first_line) = first_seen.get(name) {
            return Err(ParticipantError::Duplicate {
                name: name.to_string(),
                line,
                first_line,
            });
        }
        first_seen.insert(name, line);
        names.push(name.to_string());
    }

    Ok(names)
}
