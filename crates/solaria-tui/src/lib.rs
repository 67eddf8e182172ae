//! Full-screen terminal UI for the Solaria system-entry experience.
//!
//! Elm-shaped: `state` holds the data, `update` is the pure reducer,
//! `render` projects state onto the frame, and `runtime` owns the terminal
//! and executes effects.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use anyhow::Result;
use solaria_core::config::Config;

use crate::runtime::TuiRuntime;
pub use crate::state::RunOptions;

/// Runs the UI until the user quits.
///
/// Must be called from within a tokio runtime; background work is spawned
/// onto it while the event loop occupies the current thread.
///
/// # Errors
/// Returns an error if the terminal cannot be set up or terminal I/O fails.
pub async fn run(config: Config, options: RunOptions) -> Result<()> {
    let mut runtime = TuiRuntime::new(config, options)?;
    runtime.run()
}
