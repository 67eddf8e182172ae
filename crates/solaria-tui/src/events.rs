//! Events consumed by the reducer.
//!
//! Events come from three sources: the terminal, the tick clock, and the
//! inbox channel that async handlers send their results to.

use solaria_core::feed::MarketQuote;
use solaria_core::newsletter::SubmitOutcome;
use solaria_core::script::LogLine;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation clock; drives reveals, the gate and refresh timers.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// Uniform async-task lifecycle.
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Boot player output: the script line at `index` is due.
    BootLine { index: usize },
    /// Boot player reached the "ACCESS GRANTED" mark.
    BootReady,
    /// Boot player finished; the main screen takes over.
    BootComplete,

    HeadlineLoaded(String),
    FeedLoaded(Vec<MarketQuote>),
    /// Generated greeting for the shell overlay.
    GreetingLoaded(String),

    ContactResult(SubmitOutcome),
    /// Auto-clear timer for a contact error of generation `seq`.
    ContactErrorExpired { seq: u64 },

    /// Scripted shell command output (hack/deploy steps).
    ShellLine(LogLine),
}
