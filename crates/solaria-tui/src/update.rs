//! The reducer: `(state, event) -> effects`.
//!
//! All state mutation happens here; all I/O happens in the runtime. The
//! reducer never blocks and never touches the terminal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::gate::GateTick;
use crate::overlays::{Overlay, OverlayTransition, ShellState};
use crate::state::{AppState, Screen, TuiState};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => on_tick(app),
        UiEvent::Terminal(event) => on_terminal(app, event),

        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            Vec::new()
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                Vec::new()
            }
        }

        UiEvent::BootLine { index } => {
            if let Screen::Boot(boot) = &mut app.tui.screen {
                boot.on_line(index);
            }
            Vec::new()
        }
        UiEvent::BootReady => {
            if let Screen::Boot(boot) = &mut app.tui.screen {
                boot.on_ready();
            }
            Vec::new()
        }
        UiEvent::BootComplete => {
            if matches!(app.tui.screen, Screen::Boot(_)) {
                enter_main(&mut app.tui)
            } else {
                Vec::new()
            }
        }

        UiEvent::HeadlineLoaded(text) => {
            app.tui.headline.on_loaded(text);
            Vec::new()
        }
        UiEvent::FeedLoaded(quotes) => {
            app.tui.feed.on_loaded(quotes);
            Vec::new()
        }
        UiEvent::GreetingLoaded(message) => {
            if let Some(Overlay::Shell(shell)) = &mut app.overlay {
                shell.on_greeting(&message);
            }
            Vec::new()
        }

        UiEvent::ContactResult(outcome) => match app.tui.contact.on_result(&outcome) {
            Some(seq) => vec![UiEffect::ScheduleContactReset { seq }],
            None => Vec::new(),
        },
        UiEvent::ContactErrorExpired { seq } => {
            app.tui.contact.expire_error(seq);
            Vec::new()
        }

        // Dropped when the session that spawned it is gone.
        UiEvent::ShellLine(line) => {
            if let Some(Overlay::Shell(shell)) = &mut app.overlay {
                shell.push_line(line);
            }
            Vec::new()
        }
    }
}

/// Effects to run before the first frame.
pub fn initial_effects(app: &mut AppState) -> Vec<UiEffect> {
    if app.is_on_main() {
        fetch_effects(&mut app.tui)
    } else {
        let task = app.tui.task_seq.next_id();
        vec![UiEffect::StartBoot { task: Some(task) }]
    }
}

fn on_tick(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = Vec::new();

    match &mut app.tui.screen {
        Screen::Boot(boot) => {
            if boot.ready {
                boot.access.tick(&mut app.tui.rng);
            }
        }
        Screen::Main => {
            app.tui.subtitle.tick(&mut app.tui.rng);

            if app.tui.gate.tick() == GateTick::Opened && app.overlay.is_none() {
                app.overlay = Some(Overlay::Shell(ShellState::open()));
                let task = app.tui.task_seq.next_id();
                effects.push(UiEffect::FetchGreeting { task: Some(task) });
            }

            if app.tui.feed.tick() {
                app.tui.feed.loading = true;
                let task = app.tui.task_seq.next_id();
                effects.push(UiEffect::FetchFeed { task: Some(task) });
            }
            if app.tui.headline.tick() {
                app.tui.headline.loading = true;
                let task = app.tui.task_seq.next_id();
                effects.push(UiEffect::FetchHeadline { task: Some(task) });
            }
        }
    }

    effects
}

fn on_terminal(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return Vec::new();
    };
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(key);
        let mut effects = update.effects;
        if matches!(update.transition, OverlayTransition::Close) {
            if let Some(Overlay::Shell(shell)) = app.overlay.take() {
                effects.push(UiEffect::CancelToken {
                    token: shell.cancel,
                });
            }
        }
        return effects;
    }

    match app.tui.screen {
        Screen::Boot(_) => on_boot_key(&mut app.tui, key),
        Screen::Main => on_main_key(&mut app.tui, key),
    }
}

fn on_boot_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        // Esc skips the remaining timers and lands on the main screen.
        KeyCode::Esc => {
            let mut effects = vec![UiEffect::CancelTask {
                token: tui.tasks.boot.cancel.clone(),
            }];
            tui.tasks.boot.clear();
            effects.extend(enter_main(tui));
            effects
        }
        _ => Vec::new(),
    }
}

fn on_main_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char(' ') => {
            tui.gate.press();
            Vec::new()
        }
        KeyCode::Enter => match tui.contact.submit() {
            Some(email) => {
                let task = tui.task_seq.next_id();
                vec![UiEffect::SubmitContact {
                    task: Some(task),
                    email,
                }]
            }
            None => Vec::new(),
        },
        KeyCode::Backspace => {
            tui.contact.backspace();
            Vec::new()
        }
        KeyCode::Char(c) if !ctrl => {
            tui.contact.push_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn enter_main(tui: &mut TuiState) -> Vec<UiEffect> {
    tui.screen = Screen::Main;
    fetch_effects(tui)
}

/// First-fetch effects for the main screen (headline + market feed).
fn fetch_effects(tui: &mut TuiState) -> Vec<UiEffect> {
    tui.headline.loading = true;
    tui.feed.loading = true;
    let headline = tui.task_seq.next_id();
    let feed = tui.task_seq.next_id();
    vec![
        UiEffect::FetchHeadline {
            task: Some(headline),
        },
        UiEffect::FetchFeed { task: Some(feed) },
    ]
}
