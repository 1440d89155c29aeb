//! Clipboard seam used by the email-copy shortcut.

use heapless::String;
use log::debug;

pub const EMAIL_COPIED_MESSAGE: &str = "Email copied to clipboard!";

const MEMORY_CLIPBOARD_BYTES: usize = 64;

/// Host clipboard.
pub trait ClipboardSink {
    type Error;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClipboardFull;

/// Clipboard kept in memory, for hosts without a system clipboard.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: String<MEMORY_CLIPBOARD_BYTES>,
}

impl MemoryClipboard {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}

impl ClipboardSink for MemoryClipboard {
    type Error = ClipboardFull;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        let mut next = String::new();
        next.push_str(text).map_err(|_| ClipboardFull)?;
        debug!("clipboard: {} bytes (memory)", next.len());
        self.text = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_previous_text_on_overflow() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_text("hello@example.com").unwrap();
        assert_eq!(clipboard.text(), "hello@example.com");

        let long = "x".repeat(MEMORY_CLIPBOARD_BYTES + 1);
        assert_eq!(clipboard.write_text(&long), Err(ClipboardFull));
        assert_eq!(clipboard.text(), "hello@example.com");
    }
}
