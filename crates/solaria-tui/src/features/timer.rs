//! Tick-based refresh timer for periodic fetches.

#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: u64,
    remaining: u64,
}

impl RefreshTimer {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            interval: interval_ticks.max(1),
            remaining: interval_ticks.max(1),
        }
    }

    /// Counts down one tick. Returns true when the interval elapsed; the
    /// timer rearms itself.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }

    /// Restarts the countdown from the full interval.
    pub fn rearm(&mut self) {
        self.remaining = self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_interval() {
        let mut timer = RefreshTimer::new(3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(!timer.tick());
    }

    #[test]
    fn test_rearm_restarts_countdown() {
        let mut timer = RefreshTimer::new(2);
        timer.tick();
        timer.rearm();
        assert!(!timer.tick());
        assert!(timer.tick());
    }
}
