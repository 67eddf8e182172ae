//! Boot-sequence screen state.
//!
//! The runtime plays the boot script on timers and feeds lines back as
//! events; this state only accumulates what has been shown so far.

use solaria_core::script::{BOOT_SCRIPT, LogLine};

use super::decipher::DecipherState;

/// Headline revealed once the sequence reaches the ready mark.
pub const ACCESS_GRANTED: &str = "ACCESS GRANTED";

/// Tagline under the access panel.
pub const WELCOME_LINE: &str = "WELCOME TO THE FUTURE";

#[derive(Debug, Clone)]
pub struct BootState {
    pub lines: Vec<LogLine>,
    pub ready: bool,
    pub access: DecipherState,
    animate: bool,
}

impl BootState {
    pub fn new(animate: bool) -> Self {
        Self {
            lines: Vec::new(),
            ready: false,
            access: DecipherState::new(ACCESS_GRANTED, animate),
            animate,
        }
    }

    /// Appends the boot script line at `index`, ignoring out-of-range
    /// indices from a cancelled player.
    pub fn on_line(&mut self, index: usize) {
        if let Some(line) = BOOT_SCRIPT.get(index) {
            self.lines.push(LogLine::info(line.text));
        }
    }

    /// Marks the sequence ready and restarts the access reveal.
    pub fn on_ready(&mut self) {
        self.ready = true;
        self.access = DecipherState::new(ACCESS_GRANTED, self.animate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_accumulate_in_order() {
        let mut boot = BootState::new(false);
        boot.on_line(0);
        boot.on_line(1);
        assert_eq!(boot.lines.len(), 2);
        assert_eq!(boot.lines[0].text, BOOT_SCRIPT[0].text);
        assert_eq!(boot.lines[1].text, BOOT_SCRIPT[1].text);
    }

    #[test]
    fn test_out_of_range_line_is_ignored() {
        let mut boot = BootState::new(false);
        boot.on_line(BOOT_SCRIPT.len());
        assert!(boot.lines.is_empty());
    }

    #[test]
    fn test_ready_arms_access_reveal() {
        let mut boot = BootState::new(true);
        assert!(!boot.ready);
        boot.on_ready();
        assert!(boot.ready);
        assert!(!boot.access.is_settled());
    }
}
