//! Plain text output: the message as the whole file content.

use super::Emitter;

/// Renders each message as a UTF-8 text file without trailing newline
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEmitter;

impl Emitter for TextEmitter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, message: &str) -> Vec<u8> {
        message.as_bytes().to_vec()
    }
}
