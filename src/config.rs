//! Draw configuration
//!
//! Parses an optional `wichtel.toml` holding draw defaults and custom
//! message templates. Command line flags override whatever it sets.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::emit::message::{MessageTemplate, BUILTIN_LANGUAGES};
use crate::emit::OutputType;
use crate::plan::parse_spec;

/// Default cycle specification: one cycle through everyone
pub const DEFAULT_PERMUTATIONS: &str = "(-1,1)";

/// Default message language
pub const DEFAULT_LANGUAGE: &str = "english";

/// Defaults for a draw
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawConfig {
    /// Cycle specification, e.g. `(2,-1)`
    #[serde(default = "default_permutations")]
    pub permutations: String,
    /// Shuffle seed; absent or negative means non-deterministic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Output file format
    #[serde(default)]
    pub output_type: OutputType,
    /// Message language: a built-in or a key of `[messages]`
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_permutations() -> String {
    DEFAULT_PERMUTATIONS.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            permutations: default_permutations(),
            seed: None,
            output_type: OutputType::default(),
            language: default_language(),
        }
    }
}

/// Top-level configuration parsed from wichtel.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WichtelConfig {
    /// Draw defaults
    #[serde(default)]
    pub draw: DrawConfig,
    /// Custom message templates by language name; may override built-ins
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl WichtelConfig {
    /// Load the config file at `path`.
    ///
    /// A missing file yields the defaults unless `required` is set, which is
    /// the case when the user named the file explicitly.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let path = path.as_ref();
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    /// Parse a wichtel.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse wichtel.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse wichtel.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// The message template for `language`.
    ///
    /// Custom templates take precedence over built-ins of the same name.
    pub fn message_template(&self, language: &str) -> Result<MessageTemplate> {
        if let Some(custom) = self.messages.get(language) {
            return Ok(MessageTemplate::new(custom));
        }
        MessageTemplate::builtin(language).with_context(|| {
            format!(
                "Unknown language '{language}'. Available languages: {}",
                self.available_languages().join(", ")
            )
        })
    }

    /// Built-in and custom language names, sorted and deduplicated
    #[must_use]
    pub fn available_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = BUILTIN_LANGUAGES
            .iter()
            .copied()
            .chain(self.messages.keys().map(String::as_str))
            .collect();
        languages.sort_unstable();
        languages.dedup();
        languages
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        for (name, template) in &self.messages {
            if name.trim().is_empty() {
                bail!("Message language name cannot be empty");
            }
            if !template.contains("{{recipient}}") {
                bail!("Message '{name}' must contain {{{{recipient}}}}");
            }
        }

        self.message_template(&self.draw.language)
            .context("in [draw] language")?;

        parse_spec(&self.draw.permutations).with_context(|| {
            format!(
                "Invalid permutations '{}' in [draw]",
                self.draw.permutations
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID_CONFIG: &str = r#"
[draw]
permutations = "(2,-1)"
seed = 7
output_type = "txt"
language = "pirate"

[messages]
pirate = "Arr, ye be gifting {{recipient}}"
english = "Psst {{gifter}}, you draw {{recipient}}"
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = WichtelConfig::parse(VALID_CONFIG).unwrap();

        assert_eq!(config.draw.permutations, "(2,-1)");
        assert_eq!(config.draw.seed, Some(7));
        assert_eq!(config.draw.output_type, OutputType::Txt);
        assert_eq!(config.draw.language, "pirate");
        assert_eq!(config.messages.len(), 2);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WichtelConfig::parse("").unwrap();
        assert_eq!(config, WichtelConfig::default());
        assert_eq!(config.draw.permutations, "(-1,1)");
        assert_eq!(config.draw.output_type, OutputType::Pdf);
        assert_eq!(config.draw.language, "english");
        assert!(config.draw.seed.is_none());
    }

    #[test]
    fn test_partial_draw_section() {
        let config = WichtelConfig::parse("[draw]\nseed = 3\n").unwrap();
        assert_eq!(config.draw.seed, Some(3));
        assert_eq!(config.draw.permutations, DEFAULT_PERMUTATIONS);
    }

    #[test]
    fn test_custom_template_overrides_builtin() {
        let config = WichtelConfig::parse(VALID_CONFIG).unwrap();
        let template = config.message_template("english").unwrap();
        assert_eq!(template.as_str(), "Psst {{gifter}}, you draw {{recipient}}");

        let german = config.message_template("german").unwrap();
        assert_eq!(german, MessageTemplate::builtin("german").unwrap());
    }

    #[test]
    fn test_unknown_language_lists_available() {
        let config = WichtelConfig::parse(VALID_CONFIG).unwrap();
        let err = config.message_template("klingon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown language 'klingon'. Available languages: english, german, pirate"
        );
    }

    #[test]
    fn test_rejects_unknown_default_language() {
        let result = WichtelConfig::parse("[draw]\nlanguage = \"klingon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_template_without_recipient() {
        let err = WichtelConfig::parse("[messages]\npirate = \"Arr\"\n").unwrap_err();
        assert!(err.to_string().contains("must contain {{recipient}}"));
    }

    #[test]
    fn test_rejects_empty_language_name() {
        let result = WichtelConfig::parse("[messages]\n\" \" = \"{{recipient}}\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_malformed_permutations() {
        let result = WichtelConfig::parse("[draw]\npermutations = \"(2;3)\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_output_type() {
        let result = WichtelConfig::parse("[draw]\noutput_type = \"docx\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_optional_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = WichtelConfig::load(temp_dir.path().join("wichtel.toml"), false).unwrap();
        assert_eq!(config, WichtelConfig::default());
    }

    #[test]
    fn test_load_missing_required_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        let err = WichtelConfig::load(&path, true).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wichtel.toml");
        fs::write(&path, VALID_CONFIG).unwrap();

        let config = WichtelConfig::load(&path, false).unwrap();
        assert_eq!(config.draw.language, "pirate");
    }
}
