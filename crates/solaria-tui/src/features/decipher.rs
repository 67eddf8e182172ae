//! Scramble-reveal text animation.
//!
//! A target string is revealed left to right while the unresolved tail
//! churns through random symbols. The reveal cursor advances one third of a
//! character per tick, so each character settles after three frames.

use rand::Rng;

/// Symbol alphabet for the unresolved tail.
pub const SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone)]
pub struct DecipherState {
    target: Vec<char>,
    /// Reveal cursor in thirds of a character.
    thirds: u32,
    display: String,
    animate: bool,
    /// Ticks to hold the masked frame before the reveal starts.
    start_delay: u32,
    delay: u32,
}

impl DecipherState {
    /// Creates a reveal for `target`. With `animate` off the target is shown
    /// immediately and ticks are no-ops.
    pub fn new(target: impl Into<String>, animate: bool) -> Self {
        Self::with_delay(target, animate, 0)
    }

    /// Creates a reveal that holds the masked frame for `delay_ticks` before
    /// the scramble starts.
    pub fn with_delay(target: impl Into<String>, animate: bool, delay_ticks: u32) -> Self {
        let mut state = Self {
            target: Vec::new(),
            thirds: 0,
            display: String::new(),
            animate,
            start_delay: delay_ticks,
            delay: 0,
        };
        state.set_target(target);
        state
    }

    /// Replaces the target and restarts the reveal from the beginning,
    /// re-arming the start delay. The initial frame masks unresolved
    /// characters with zeros; the first live tick replaces the mask with
    /// scramble.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into().chars().collect();
        if self.animate {
            self.thirds = 0;
            self.delay = self.start_delay;
            self.display = self.target.iter().map(|_| '0').collect();
        } else {
            self.thirds = self.settle_point();
            self.delay = 0;
            self.display = self.target.iter().collect();
        }
    }

    pub fn is_settled(&self) -> bool {
        self.thirds >= self.settle_point()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Advances the reveal by one frame.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.is_settled() {
            return;
        }
        if self.delay > 0 {
            self.delay -= 1;
            return;
        }
        self.thirds += 1;
        let revealed = (self.thirds / 3) as usize;
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < revealed {
                    c
                } else {
                    SYMBOLS[rng.gen_range(0..SYMBOLS.len())] as char
                }
            })
            .collect();
    }

    fn settle_point(&self) -> u32 {
        self.target.len() as u32 * 3
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_reveal_settles_after_three_ticks_per_char() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = DecipherState::new("ACCESS", true);
        assert!(!state.is_settled());

        for _ in 0..(6 * 3) {
            state.tick(&mut rng);
        }
        assert!(state.is_settled());
        assert_eq!(state.display(), "ACCESS");
    }

    #[test]
    fn test_prefix_stays_revealed() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = DecipherState::new("VENTURE CAPITAL", true);
        for _ in 0..9 {
            state.tick(&mut rng);
        }
        // 9 thirds = 3 settled characters.
        assert!(state.display().starts_with("VEN"));
    }

    #[test]
    fn test_unrevealed_positions_come_from_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = DecipherState::new("A B", true);
        state.tick(&mut rng);
        // Every unrevealed position churns, spaces included.
        for c in state.display().chars() {
            assert!(
                SYMBOLS.contains(&(c as u8)),
                "unrevealed char {c:?} not in symbol alphabet"
            );
        }
    }

    #[test]
    fn test_disabled_shows_target_immediately() {
        let state = DecipherState::new("VENTURE CAPITAL", false);
        assert!(state.is_settled());
        assert_eq!(state.display(), "VENTURE CAPITAL");
    }

    #[test]
    fn test_start_delay_holds_the_mask() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = DecipherState::with_delay("AB", true, 2);
        state.tick(&mut rng);
        state.tick(&mut rng);
        assert_eq!(state.display(), "00");

        for _ in 0..6 {
            state.tick(&mut rng);
        }
        assert!(state.is_settled());
        assert_eq!(state.display(), "AB");
    }

    #[test]
    fn test_empty_target_completes_immediately() {
        let state = DecipherState::new("", true);
        assert!(state.is_settled());
        assert_eq!(state.display(), "");
    }

    #[test]
    fn test_set_target_restarts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = DecipherState::new("AB", true);
        for _ in 0..6 {
            state.tick(&mut rng);
        }
        assert!(state.is_settled());

        state.set_target("CD");
        assert!(!state.is_settled());
        assert_eq!(state.display(), "00");
    }
}
