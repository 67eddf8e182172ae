//! Render layer: pure projection of `AppState` onto the frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use solaria_core::script::LogLine;

use crate::common::text::{marquee_window, truncate_with_ellipsis};
use crate::features::boot::{BootState, WELCOME_LINE};
use crate::features::contact::ContactStatus;
use crate::features::feed::FEED_PLACEHOLDER;
use crate::state::{AppState, Screen};

const GREEN: Style = Style::new().fg(Color::Green);
const DIM: Style = Style::new().fg(Color::DarkGray);

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match &app.tui.screen {
        Screen::Boot(boot) => render_boot(boot, frame, area),
        Screen::Main => render_main(app, frame, area),
    }

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
}

fn render_boot(boot: &BootState, frame: &mut Frame, area: Rect) {
    let [_, content, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(60.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, body] =
        Layout::vertical([Constraint::Length(area.height / 4), Constraint::Fill(1)]).areas(content);

    let mut lines: Vec<Line> = boot.lines.iter().map(boot_line).collect();
    lines.push(Line::from(Span::styled("█", GREEN)));

    if boot.ready {
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                boot.access.display().to_string(),
                GREEN.add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        lines.push(Line::from(Span::styled(WELCOME_LINE, DIM)).centered());
    }

    frame.render_widget(Paragraph::new(lines), body);
}

fn boot_line(line: &LogLine) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{}] ", line.timestamp), DIM),
        Span::styled(line.text.clone(), GREEN),
    ])
}

fn render_main(app: &AppState, frame: &mut Frame, area: Rect) {
    let [ticker_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_ticker(app, frame, ticker_area);
    render_card(app, frame, body_area);
    render_status_line(app, frame, status_area);
}

fn render_ticker(app: &AppState, frame: &mut Frame, area: Rect) {
    let feed = &app.tui.feed;
    let label = " LIVE FEED │";

    let line = if feed.quotes.is_empty() {
        Line::from(Span::styled(format!(" ⟳ {FEED_PLACEHOLDER}"), GREEN))
    } else {
        let width = usize::from(area.width).saturating_sub(label.len());
        Line::from(vec![
            Span::styled(label, GREEN.add_modifier(Modifier::BOLD)),
            Span::styled(marquee_window(&feed.tape(), feed.offset, width), GREEN),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_card(app: &AppState, frame: &mut Frame, area: Rect) {
    let width = 72.min(area.width);
    let height = 20.min(area.height);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default().borders(Borders::ALL).border_style(DIM);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(
        Line::from(Span::styled(
            "S O L A R I A",
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    lines.push(Line::from(Span::styled(app.tui.subtitle.display().to_string(), GREEN)).centered());
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "San Diego's premier student-run venture fund.",
            DIM,
        ))
        .centered(),
    );
    lines.push(
        Line::from(Span::styled(
            "We deploy capital into the decentralized future.",
            DIM,
        ))
        .centered(),
    );
    lines.push(Line::from(Span::styled("Algorithms Initializing...", GREEN)).centered());
    lines.push(Line::default());

    let headline = truncate_with_ellipsis(
        &app.tui.headline.text,
        usize::from(inner.width).saturating_sub(12),
    );
    lines.push(Line::from(vec![
        Span::styled(" ◉ LATEST: ", GREEN),
        Span::styled(headline, Style::new().fg(Color::White)),
    ]));
    lines.push(Line::default());

    lines.extend(gate_lines(app, inner.width));
    lines.push(Line::default());
    lines.extend(contact_lines(app));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" ID: SOL-9928-X", DIM),
        Span::styled("   LOC: UCSD, CA", DIM),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn gate_lines(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let progress = app.tui.gate.progress();
    let lock = if app.overlay.is_some() {
        Span::styled("UNLOCKED", GREEN)
    } else {
        Span::styled("● LOCKED", GREEN)
    };

    let bar_width = usize::from(width).saturating_sub(4).max(10);
    let filled = bar_width * usize::from(progress) / 100;
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

    let caption = if progress > 0 {
        format!("DECRYPTING... {progress}%")
    } else {
        "HOLD [SPACE] TO ACCESS SYSTEM".to_string()
    };

    vec![
        Line::from(vec![
            Span::styled(" SYSTEM STATUS ", DIM),
            lock,
        ]),
        Line::from(Span::styled(bar, GREEN)).centered(),
        Line::from(Span::styled(
            caption,
            GREEN.add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Press and hold to override security protocols",
            DIM,
        ))
        .centered(),
    ]
}

fn contact_lines(app: &AppState) -> Vec<Line<'static>> {
    let contact = &app.tui.contact;
    let mut lines = vec![Line::from(Span::styled(" PRIORITY_ACCESS_LIST", GREEN))];

    match contact.status {
        ContactStatus::Success => {
            lines.push(
                Line::from(Span::styled(
                    format!("✔ {}", contact.message),
                    GREEN.add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
        }
        ContactStatus::Loading => {
            lines.push(Line::from(Span::styled(" > TRANSMITTING_DATA...", DIM)));
        }
        ContactStatus::Idle | ContactStatus::Error => {
            let field = if contact.input.is_empty() {
                Span::styled("enter_email...", Style::new().fg(Color::DarkGray))
            } else {
                Span::styled(contact.input.clone(), GREEN)
            };
            lines.push(Line::from(vec![
                Span::styled(" > ", GREEN),
                field,
                Span::styled("█", GREEN),
            ]));
            if contact.status == ContactStatus::Error {
                lines.push(Line::from(Span::styled(
                    format!(" {}", contact.message),
                    Style::new().fg(Color::Red),
                )));
            }
        }
    }
    lines
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints = if app.overlay.is_some() {
        " enter run command · esc close terminal"
    } else {
        " space hold to access · type+enter join list · esc quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, DIM))).alignment(Alignment::Left),
        area,
    );
}
