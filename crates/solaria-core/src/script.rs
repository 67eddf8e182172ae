//! Canned script data: terminal log lines and the boot sequence.
//!
//! Everything here is deterministic replay material. The boot sequence is a
//! fixed list of (message, offset) pairs measured from sequence start; the
//! player fires each line at its offset and never mutates the script.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual class of a terminal log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Info,
    Warning,
    Success,
    Error,
    System,
}

/// One immutable line in a terminal log.
///
/// Lines are appended to an ordered sequence and never mutated or removed
/// except by an explicit clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub id: Uuid,
    pub text: String,
    pub kind: LineKind,
    /// Wall-clock time of creation, formatted HH:MM:SS.
    pub timestamp: String,
}

impl LogLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            kind,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Info)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Warning)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::System)
    }
}

/// One scheduled line of the boot sequence.
#[derive(Debug, Clone, Copy)]
pub struct BootLine {
    pub text: &'static str,
    /// Offset from sequence start, in milliseconds.
    pub offset_ms: u64,
}

/// The boot script, in scheduled order.
pub const BOOT_SCRIPT: &[BootLine] = &[
    BootLine { text: "BIOS CHECK... OK", offset_ms: 100 },
    BootLine { text: "LOADING KERNEL... 100%", offset_ms: 400 },
    BootLine { text: "MOUNTING FILESYSTEMS... OK", offset_ms: 800 },
    BootLine { text: "ESTABLISHING SECURE HANDSHAKE...", offset_ms: 1200 },
    BootLine { text: "VERIFYING ENCRYPTION KEYS...", offset_ms: 1600 },
    BootLine { text: "BYPASSING FIREWALL...", offset_ms: 2000 },
    BootLine { text: "CONNECTING TO SOLARIA_MAINNET...", offset_ms: 2500 },
    BootLine { text: "USER AUTHENTICATION REQUIRED...", offset_ms: 3000 },
];

/// Offset at which the "ACCESS GRANTED" panel appears.
pub const BOOT_READY_MS: u64 = 3500;

/// Offset at which the boot sequence completes and the main screen takes over.
pub const BOOT_COMPLETE_MS: u64 = 5500;

/// Backend setup script offered by the shell's `copy` command.
///
/// This is the spreadsheet-backed web-app handler the newsletter endpoint
/// expects; the shell copies it to the clipboard verbatim.
pub const BACKEND_SCRIPT: &str = r"/*
   === SOLARIA BACKEND SCRIPT ===
   Paste into Extensions > Apps Script, run SETUP_PERMISSIONS once,
   then Deploy > New Deployment > Web App (Execute as: Me, Access: Anyone).
*/

function doPost(e) {
  var lock = LockService.getScriptLock();
  lock.tryLock(10000);
  try {
    var sheet = SpreadsheetApp.getActiveSpreadsheet().getActiveSheet();
    var email = (e && e.parameter && e.parameter.email) ? e.parameter.email : 'unknown';
    sheet.appendRow([new Date(), email]);
    return ContentService.createTextOutput(JSON.stringify({ result: 'success' }))
      .setMimeType(ContentService.MimeType.JSON);
  } catch (err) {
    return ContentService.createTextOutput(JSON.stringify({ result: 'error', error: err.toString() }))
      .setMimeType(ContentService.MimeType.JSON);
  } finally {
    lock.releaseLock();
  }
}

function SETUP_PERMISSIONS() {
  SpreadsheetApp.getActiveSpreadsheet();
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_script_offsets_are_monotonic() {
        let mut last = 0;
        for line in BOOT_SCRIPT {
            assert!(line.offset_ms >= last, "offsets must not go backwards");
            last = line.offset_ms;
        }
        assert!(BOOT_READY_MS > last);
        assert!(BOOT_COMPLETE_MS > BOOT_READY_MS);
    }

    #[test]
    fn test_log_line_constructors_set_kind() {
        assert_eq!(LogLine::info("a").kind, LineKind::Info);
        assert_eq!(LogLine::warning("a").kind, LineKind::Warning);
        assert_eq!(LogLine::success("a").kind, LineKind::Success);
        assert_eq!(LogLine::error("a").kind, LineKind::Error);
        assert_eq!(LogLine::system("a").kind, LineKind::System);
    }

    #[test]
    fn test_log_line_ids_are_unique() {
        let a = LogLine::info("same text");
        let b = LogLine::info("same text");
        assert_ne!(a.id, b.id);
    }
}
