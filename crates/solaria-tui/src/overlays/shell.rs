//! Command shell overlay (ROOT_ACCESS_TERMINAL).
//!
//! The shell owns its log, its input line and a session cancellation token.
//! Instant commands append lines synchronously; scripted commands (hack,
//! deploy) hand the delayed tail to the runtime as a `PlayShellScript`
//! effect under the session token, so closing the overlay stops every
//! pending line at once.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use solaria_core::script::{BACKEND_SCRIPT, LineKind, LogLine};
use tokio_util::sync::CancellationToken;

use super::{OverlayUpdate, centered_rect};
use crate::effects::UiEffect;

/// One delayed line of a scripted command.
#[derive(Debug, Clone)]
pub struct ScriptStep {
    /// Pause before this line appears, in milliseconds.
    pub delay_ms: u64,
    pub text: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    Clear,
    Status,
    Hack,
    Deploy,
    Copy,
    About,
    Contact,
    Exit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "help" => Some(Self::Help),
            "clear" => Some(Self::Clear),
            "status" => Some(Self::Status),
            "hack" => Some(Self::Hack),
            "deploy" => Some(Self::Deploy),
            "copy" => Some(Self::Copy),
            "about" => Some(Self::About),
            "contact" => Some(Self::Contact),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ShellState {
    pub lines: Vec<LogLine>,
    pub input: String,
    /// Session token; cancelled when the overlay closes.
    pub cancel: CancellationToken,
}

impl ShellState {
    /// Opens a shell session with the fixed greeting. The generated status
    /// line arrives later via `GreetingLoaded`.
    pub fn open() -> Self {
        Self {
            lines: vec![
                LogLine::system("SOLARIA_OS [Version 2.5.1]"),
                LogLine::system("(c) 2025 Solaria Venture Capital. All rights reserved."),
                LogLine::info("Type 'help' for commands."),
            ],
            input: String::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn push_line(&mut self, line: LogLine) {
        self.lines.push(line);
    }

    pub fn on_greeting(&mut self, message: &str) {
        self.lines.push(LogLine::success(format!("> {message}")));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    fn submit(&mut self) -> OverlayUpdate {
        let raw = std::mem::take(&mut self.input);
        let command = raw.trim().to_lowercase();
        if command.is_empty() {
            return OverlayUpdate::stay();
        }
        self.push_line(LogLine::info(format!("user@solaria:~$ {raw}")));

        match Command::parse(&command) {
            Some(Command::Help) => {
                self.push_line(LogLine::system("AVAILABLE COMMANDS:"));
                self.push_line(LogLine::info("  help      - Show this list"));
                self.push_line(LogLine::info("  status    - Check system status"));
                self.push_line(LogLine::warning("  hack      - Initiate brute-force simulation"));
                self.push_line(LogLine::warning("  deploy    - Get Google backend code"));
                self.push_line(LogLine::info("  about     - Display organization info"));
                self.push_line(LogLine::info("  contact   - Show communication channels"));
                self.push_line(LogLine::info("  exit      - Close terminal"));
                OverlayUpdate::stay()
            }
            Some(Command::Clear) => {
                self.lines.clear();
                OverlayUpdate::stay()
            }
            Some(Command::Status) => {
                self.push_line(LogLine::success("SYSTEM STATUS: PRE-LAUNCH"));
                self.push_line(LogLine::success("MARKET DATA STREAM: ACTIVE"));
                self.push_line(LogLine::success("USER_CONNECTION: SECURE"));
                OverlayUpdate::stay()
            }
            Some(Command::Hack) => {
                self.push_line(LogLine::warning("INITIATING BRUTE FORCE ATTACK..."));
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::PlayShellScript {
                    steps: hack_steps(&mut rand::thread_rng()),
                    cancel: self.cancel.clone(),
                }])
            }
            Some(Command::Deploy) => {
                self.push_line(LogLine::system("=== GOOGLE BACKEND SETUP ==="));
                self.push_line(LogLine::info("STEP 1: Type 'copy' to get the script."));
                self.push_line(LogLine::info("STEP 2: Paste into Extensions > Apps Script."));
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::PlayShellScript {
                    steps: deploy_steps(),
                    cancel: self.cancel.clone(),
                }])
            }
            Some(Command::Copy) => {
                self.push_line(LogLine::success("Backend script copied to clipboard."));
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::CopyToClipboard {
                    text: BACKEND_SCRIPT.to_string(),
                }])
            }
            Some(Command::About) => {
                self.push_line(LogLine::system(
                    "Solaria VC is a student-run venture capital fund at UCSD.",
                ));
                self.push_line(LogLine::info("Focus: Blockchain, AI, and Deep Tech."));
                OverlayUpdate::stay()
            }
            Some(Command::Contact) => {
                self.push_line(LogLine::info("Email: contact@solariavc.com"));
                self.push_line(LogLine::info("Instagram: @solaria_ucsd"));
                OverlayUpdate::stay()
            }
            Some(Command::Exit) => OverlayUpdate::close(),
            None => {
                self.push_line(LogLine::error(format!("Command not found: {command}")));
                OverlayUpdate::stay()
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(area, 70, 70);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" ROOT_ACCESS_TERMINAL ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [log_area, input_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let visible = usize::from(log_area.height);
        let start = self.lines.len().saturating_sub(visible);
        let log_lines: Vec<Line> = self.lines[start..]
            .iter()
            .map(|line| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", line.timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(line.text.clone(), line_style(line.kind)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(log_lines), log_area);

        let prompt = Line::from(vec![
            Span::styled(
                "user@solaria:~$ ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.input.clone()),
            Span::styled("█", Style::default().fg(Color::Green)),
        ]);
        frame.render_widget(Paragraph::new(prompt), input_area);
    }
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Info => Style::default().fg(Color::Gray),
        LineKind::Warning => Style::default().fg(Color::Yellow),
        LineKind::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        LineKind::Error => Style::default().fg(Color::Red),
        LineKind::System => Style::default().fg(Color::Cyan),
    }
}

/// Five payload injections at 400ms, then the reveal after 500ms more.
fn hack_steps(rng: &mut impl Rng) -> Vec<ScriptStep> {
    let mut steps = Vec::new();
    for _ in 0..5 {
        steps.push(ScriptStep {
            delay_ms: 400,
            text: format!("Injecting payload to node 0x{:x}...", rng.gen_range(0..1000)),
            kind: LineKind::Info,
        });
    }
    steps.push(ScriptStep {
        delay_ms: 500,
        text: "ACCESS GRANTED. REVEALING HIDDEN DATA...".to_string(),
        kind: LineKind::Success,
    });
    steps.push(ScriptStep {
        delay_ms: 0,
        text: "Found string: 'THE FUTURE IS DECENTRALIZED'".to_string(),
        kind: LineKind::System,
    });
    steps
}

fn deploy_steps() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            delay_ms: 200,
            text: "CRITICAL: Select function 'SETUP_PERMISSIONS' and click Run.".to_string(),
            kind: LineKind::Warning,
        },
        ScriptStep {
            delay_ms: 0,
            text: "        (This fixes the permission error)".to_string(),
            kind: LineKind::Warning,
        },
        ScriptStep {
            delay_ms: 200,
            text: "STEP 3: Deploy > New Deployment > Web App.".to_string(),
            kind: LineKind::Info,
        },
        ScriptStep {
            delay_ms: 0,
            text: "        Execute as: Me, Access: Anyone.".to_string(),
            kind: LineKind::Info,
        },
        ScriptStep {
            delay_ms: 0,
            text: "STEP 4: Set the URL as [newsletter] endpoint in config.toml.".to_string(),
            kind: LineKind::Success,
        },
    ]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_command(shell: &mut ShellState, command: &str) -> OverlayUpdate {
        for c in command.chars() {
            shell.handle_key(key(KeyCode::Char(c)));
        }
        shell.handle_key(key(KeyCode::Enter))
    }

    #[test]
    fn test_open_shows_greeting() {
        let shell = ShellState::open();
        assert_eq!(shell.lines.len(), 3);
        assert!(shell.lines[0].text.contains("SOLARIA_OS"));
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let mut shell = ShellState::open();
        type_command(&mut shell, "  HELP  ");
        let last = shell.lines.last().unwrap();
        assert_eq!(last.text, "  exit      - Close terminal");
    }

    #[test]
    fn test_empty_submission_adds_nothing() {
        let mut shell = ShellState::open();
        let before = shell.lines.len();
        shell.handle_key(key(KeyCode::Enter));
        assert_eq!(shell.lines.len(), before);
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let mut shell = ShellState::open();
        type_command(&mut shell, "frobnicate");
        let last = shell.lines.last().unwrap();
        assert_eq!(last.kind, LineKind::Error);
        assert_eq!(last.text, "Command not found: frobnicate");
    }

    #[test]
    fn test_clear_empties_the_log() {
        let mut shell = ShellState::open();
        type_command(&mut shell, "clear");
        assert!(shell.lines.is_empty());
    }

    #[test]
    fn test_exit_closes_overlay() {
        let mut shell = ShellState::open();
        let update = type_command(&mut shell, "exit");
        assert!(matches!(update.transition, OverlayTransition::Close));
    }

    #[test]
    fn test_hack_echoes_then_scripts_the_rest() {
        let mut shell = ShellState::open();
        let update = type_command(&mut shell, "hack");
        let last = shell.lines.last().unwrap();
        assert_eq!(last.text, "INITIATING BRUTE FORCE ATTACK...");
        assert_eq!(last.kind, LineKind::Warning);
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::PlayShellScript { .. }]
        ));
    }

    #[test]
    fn test_hack_steps_shape() {
        let steps = hack_steps(&mut StdRng::seed_from_u64(9));
        assert_eq!(steps.len(), 7);
        assert!(steps[0].text.starts_with("Injecting payload to node 0x"));
        assert_eq!(steps[5].delay_ms, 500);
        assert_eq!(steps[6].kind, LineKind::System);
    }

    #[test]
    fn test_copy_emits_clipboard_effect() {
        let mut shell = ShellState::open();
        let update = type_command(&mut shell, "copy");
        assert_eq!(
            shell.lines.last().unwrap().text,
            "Backend script copied to clipboard."
        );
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::CopyToClipboard { .. }]
        ));
    }

    #[test]
    fn test_escape_closes() {
        let mut shell = ShellState::open();
        let update = shell.handle_key(key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
    }
}
