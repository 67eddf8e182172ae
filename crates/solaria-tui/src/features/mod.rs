//! Feature state machines driven by the reducer.
//!
//! Everything here is pure and tick-driven; timers and network live in the
//! runtime.

pub mod boot;
pub mod contact;
pub mod decipher;
pub mod feed;
pub mod gate;
pub mod timer;
