//! Message templates
//!
//! Supports `{{variable_name}}` syntax. Unknown variables are left as-is.
//! The variables available to a message are `recipient` and `gifter`.

use std::collections::HashMap;

use crate::draw::Pairing;

/// Built-in english message
pub const ENGLISH: &str = "You are secret santa for: {{recipient}}";

/// Built-in german message
pub const GERMAN: &str = "Du machst ein Geschenk für: {{recipient}}";

/// Names of the built-in languages
pub const BUILTIN_LANGUAGES: [&str; 2] = ["english", "german"];

/// A message template for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    template: String,
}

impl MessageTemplate {
    /// Wrap a template string
    #[must_use]
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// The template for a built-in language, if there is one
    #[must_use]
    pub fn builtin(language: &str) -> Option<Self> {
        match language {
            "english" => Some(Self::new(ENGLISH)),
            "german" => Some(Self::new(GERMAN)),
            _ => None,
        }
    }

    /// The raw template text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Render the message a gifter receives
    #[must_use]
    pub fn render(&self, pairing: &Pairing) -> String {
        let vars = HashMap::from([
            ("recipient", pairing.recipient.as_str()),
            ("gifter", pairing.gifter.as_str()),
        ]);
        expand_template(&self.template, &vars)
    }
}

/// Expand `{{variable_name}}` patterns in a template string.
///
/// Resolution: looks up each `{{name}}` in `vars`. If found, replaces with
/// the value. If not found, leaves the `{{name}}` literal in the output.
/// Partial syntax like `{{incomplete` and names containing whitespace are
/// also left as-is.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn expand_template(template: &str, vars: &HashMap<&str, &str>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        result.push_str(&rest[..open]);
        let after = &rest[open + 2..];

        match after.find("}}") {
            Some(close) if close > 0 && !after[..close].contains(char::is_whitespace) => {
                let name = &after[..close];
                match vars.get(name) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[open..open + 4 + close]),
                }
                rest = &after[close + 2..];
            }
            // No closing `}}` or not a variable name: emit the literal `{{`
            _ => {
                result.push_str("{{");
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
