//! Shared TUI utilities.

pub mod clipboard;
pub mod task;
pub mod text;

pub use clipboard::Clipboard;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
