//! Core services for the Solaria system-entry terminal.
//!
//! This crate carries everything that is not rendering: configuration,
//! file logging, the canned boot/shell script data, the market-feed model,
//! and the two network collaborators (the generative-text provider and the
//! newsletter endpoint).

pub mod config;
pub mod feed;
pub mod logging;
pub mod newsletter;
pub mod providers;
pub mod script;
