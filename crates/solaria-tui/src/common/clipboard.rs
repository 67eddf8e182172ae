//! Thin wrapper around the system clipboard.

use anyhow::{Context, Result};

pub struct Clipboard;

impl Clipboard {
    /// Copies `text` to the system clipboard.
    ///
    /// # Errors
    /// Returns an error when no clipboard is available (e.g. headless hosts).
    pub fn copy(text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to write clipboard")?;
        Ok(())
    }
}
