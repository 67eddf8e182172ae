//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s directly to `inbox_tx`; the runtime
//! drains `inbox_rx` each frame. Timed work (boot player, shell scripts,
//! the contact auto-clear) runs on tokio timers and feeds back the same
//! way, so the loop itself never sleeps on anything but terminal polling.

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use solaria_core::config::Config;
use solaria_core::script::LogLine;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{Clipboard, TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, RunOptions};
use crate::{render, terminal, update};

/// Animation tick cadence in milliseconds. Reveals advance one third of a
/// character per tick and the gate charges +2 per tick.
pub const TICK_MS: u64 = 30;

/// Poll/tick interval for the event loop.
pub const FRAME_DURATION: Duration = Duration::from_millis(TICK_MS);

/// Delay before an error message on the contact form clears itself.
const CONTACT_ERROR_TTL: Duration = Duration::from_millis(3000);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: Config, options: RunOptions) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config, options);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    ///
    /// Must be called from within a tokio runtime; effect handlers are
    /// spawned onto it.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let initial = update::initial_effects(&mut self.state);
        self.execute_effects(initial);

        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps frame rate at tick cadence.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the terminal and the inbox, plus the Tick clock.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal input:
        // - If we already have events to process, non-blocking poll
        // - Otherwise block until the next tick is due
        let time_until_tick = FRAME_DURATION.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= FRAME_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect, sending the result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            UiEffect::StartBoot { task } => {
                let Some(task) = task else {
                    return;
                };
                let tx = self.inbox_tx.clone();
                self.spawn_task(TaskKind::Boot, task, true, move |cancel| async move {
                    // cancelable => the token is always present
                    let cancel = cancel.unwrap_or_default();
                    handlers::boot_sequence(tx, cancel).await
                });
            }

            UiEffect::CancelTask { token } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
            UiEffect::CancelToken { token } => {
                token.cancel();
            }

            UiEffect::FetchHeadline { task } => {
                let Some(task) = task else {
                    return;
                };
                let config = self.state.tui.config.clone();
                self.spawn_task(TaskKind::Headline, task, false, move |_| {
                    handlers::fetch_headline(config)
                });
            }
            UiEffect::FetchFeed { task } => {
                let Some(task) = task else {
                    return;
                };
                let config = self.state.tui.config.clone();
                self.spawn_task(TaskKind::Feed, task, false, move |_| {
                    handlers::fetch_feed(config)
                });
            }
            UiEffect::FetchGreeting { task } => {
                let Some(task) = task else {
                    return;
                };
                let config = self.state.tui.config.clone();
                self.spawn_task(TaskKind::Greeting, task, false, move |_| {
                    handlers::fetch_greeting(config)
                });
            }

            UiEffect::SubmitContact { task, email } => {
                let Some(task) = task else {
                    return;
                };
                let config = self.state.tui.config.clone();
                self.spawn_task(TaskKind::Contact, task, false, move |_| {
                    handlers::submit_contact(config, email)
                });
            }
            UiEffect::ScheduleContactReset { seq } => {
                self.spawn_effect(move || async move {
                    tokio::time::sleep(CONTACT_ERROR_TTL).await;
                    UiEvent::ContactErrorExpired { seq }
                });
            }

            UiEffect::PlayShellScript { steps, cancel } => {
                let tx = self.inbox_tx.clone();
                tokio::spawn(async move {
                    for step in steps {
                        if step.delay_ms > 0 {
                            tokio::select! {
                                () = cancel.cancelled() => return,
                                () = tokio::time::sleep(Duration::from_millis(step.delay_ms)) => {}
                            }
                        }
                        if cancel.is_cancelled() {
                            return;
                        }
                        let _ = tx.send(UiEvent::ShellLine(LogLine::new(step.text, step.kind)));
                    }
                });
            }

            UiEffect::CopyToClipboard { text } => {
                // Headless hosts have no clipboard; the shell already showed
                // its confirmation line.
                if let Err(e) = Clipboard::copy(&text) {
                    tracing::warn!("clipboard copy failed: {e:#}");
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
