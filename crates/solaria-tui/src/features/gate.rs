//! Hold-to-access gate.
//!
//! Terminals report key repeats rather than key releases, so a press arms a
//! short grace window and every tick inside the window charges the bar.
//! When presses stop arriving the window drains and progress snaps back to
//! zero. Reaching 100 opens the shell exactly once and resets.

/// Progress gained per charging tick (+2 per 30ms tick, 0..100 in 1.5s).
pub const FILL_PER_TICK: u8 = 2;

/// Ticks a single press keeps the gate charging. Sized to outlast the
/// terminal's key-repeat delay so a held key reads as one continuous hold.
pub const GRACE_TICKS: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTick {
    Idle,
    Charging,
    Opened,
}

#[derive(Debug, Default, Clone)]
pub struct GateState {
    progress: u8,
    grace: u8,
}

impl GateState {
    /// Registers a press (initial or repeat) of the hold key.
    pub fn press(&mut self) {
        self.grace = GRACE_TICKS;
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_charging(&self) -> bool {
        self.grace > 0
    }

    /// Advances the gate by one tick.
    pub fn tick(&mut self) -> GateTick {
        if self.grace == 0 {
            self.progress = 0;
            return GateTick::Idle;
        }
        self.grace -= 1;
        self.progress = self.progress.saturating_add(FILL_PER_TICK).min(100);
        if self.progress >= 100 {
            self.progress = 0;
            self.grace = 0;
            GateTick::Opened
        } else {
            GateTick::Charging
        }
    }
}
