//! Priority-access (newsletter) form state.

use solaria_core::newsletter::SubmitOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct ContactState {
    pub input: String,
    pub status: ContactStatus,
    pub message: String,
    /// Error generation counter; guards stale auto-clear timers.
    pub seq: u64,
}

impl ContactState {
    /// True while the field accepts edits. The success panel is terminal and
    /// a submission in flight locks the field.
    pub fn accepts_input(&self) -> bool {
        !matches!(self.status, ContactStatus::Loading | ContactStatus::Success)
    }

    pub fn push_char(&mut self, c: char) {
        if self.accepts_input() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.accepts_input() {
            self.input.pop();
        }
    }

    /// Attempts a submission. Returns the email to send, or `None` when the
    /// field is blank or a submission is already in flight.
    pub fn submit(&mut self) -> Option<String> {
        if !self.accepts_input() {
            return None;
        }
        let email = self.input.trim().to_string();
        if email.is_empty() {
            return None;
        }
        self.status = ContactStatus::Loading;
        Some(email)
    }

    /// Applies the submission outcome. Returns the error generation to
    /// schedule an auto-clear for, if the outcome was a failure.
    pub fn on_result(&mut self, outcome: &SubmitOutcome) -> Option<u64> {
        self.message = outcome.message.clone();
        if outcome.success {
            self.status = ContactStatus::Success;
            self.input.clear();
            None
        } else {
            self.status = ContactStatus::Error;
            self.seq += 1;
            Some(self.seq)
        }
    }

    /// Clears an expired error, ignoring timers from older errors.
    pub fn expire_error(&mut self, seq: u64) {
        if self.status == ContactStatus::Error && self.seq == seq {
            self.status = ContactStatus::Idle;
            self.message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use solaria_core::newsletter::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

    use super::*;

    fn failure() -> SubmitOutcome {
        SubmitOutcome {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut contact = ContactState::default();
        contact.input = "   ".to_string();
        assert!(contact.submit().is_none());
        assert_eq!(contact.status, ContactStatus::Idle);
    }

    #[test]
    fn test_submit_locks_the_field() {
        let mut contact = ContactState::default();
        contact.input = "user@example.com".to_string();
        assert_eq!(contact.submit().as_deref(), Some("user@example.com"));
        assert_eq!(contact.status, ContactStatus::Loading);

        // Locked while in flight.
        contact.push_char('x');
        assert_eq!(contact.input, "user@example.com");
        assert!(contact.submit().is_none());
    }

    #[test]
    fn test_success_clears_input_and_is_terminal() {
        let mut contact = ContactState::default();
        contact.input = "user@example.com".to_string();
        contact.submit();
        let cleared = contact.on_result(&SubmitOutcome {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        });
        assert!(cleared.is_none());
        assert_eq!(contact.status, ContactStatus::Success);
        assert!(contact.input.is_empty());
        contact.push_char('x');
        assert!(contact.input.is_empty());
    }

    #[test]
    fn test_error_autoclears_only_for_current_generation() {
        let mut contact = ContactState::default();
        contact.input = "a@b.c".to_string();
        contact.submit();
        let seq = contact.on_result(&failure()).unwrap();
        assert_eq!(contact.status, ContactStatus::Error);

        // A stale timer from an older error must not clear the new one.
        contact.expire_error(seq - 1);
        assert_eq!(contact.status, ContactStatus::Error);

        contact.expire_error(seq);
        assert_eq!(contact.status, ContactStatus::Idle);
        assert!(contact.message.is_empty());
    }

    #[test]
    fn test_error_keeps_typed_input() {
        let mut contact = ContactState::default();
        contact.input = "a@b.c".to_string();
        contact.submit();
        contact.on_result(&failure());
        assert_eq!(contact.input, "a@b.c");
    }
}
