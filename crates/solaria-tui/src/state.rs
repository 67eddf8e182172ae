//! Application state.
//!
//! Split into `tui` (screen and feature state) and `overlay` so the reducer
//! can hand keys to an overlay while borrowing the rest of the state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use solaria_core::config::Config;

use crate::common::{TaskSeq, Tasks};
use crate::features::boot::BootState;
use crate::features::contact::ContactState;
use crate::features::decipher::DecipherState;
use crate::features::feed::{FeedState, HeadlineState};
use crate::features::gate::GateState;
use crate::overlays::Overlay;
use crate::runtime::TICK_MS;

/// Subtitle revealed on the main screen.
pub const SUBTITLE: &str = "VENTURE CAPITAL";

/// Command-line switches that shape a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Jump straight to the main screen.
    pub skip_boot: bool,
    /// Disable reveals and the boot sequence (also settable in config).
    pub reduced_motion: bool,
}

#[derive(Debug)]
pub enum Screen {
    Boot(BootState),
    Main,
}

#[derive(Debug)]
pub struct TuiState {
    pub config: Config,
    pub should_quit: bool,
    pub screen: Screen,
    /// False under reduced motion: reveals settle instantly.
    pub animate: bool,
    pub subtitle: DecipherState,
    pub gate: GateState,
    pub contact: ContactState,
    pub feed: FeedState,
    pub headline: HeadlineState,
    pub tasks: Tasks,
    pub task_seq: TaskSeq,
    pub rng: StdRng,
}

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, options: RunOptions) -> Self {
        Self::with_rng(config, options, StdRng::from_entropy())
    }

    pub fn with_rng(config: Config, options: RunOptions, rng: StdRng) -> Self {
        let animate = !(options.reduced_motion || config.reduced_motion);
        // Reduced motion implies an instant boot.
        let screen = if options.skip_boot || !animate {
            Screen::Main
        } else {
            Screen::Boot(BootState::new(animate))
        };

        let feed_ticks = config.feed_refresh_secs * 1000 / TICK_MS;
        let headline_ticks = config.headline_refresh_secs * 1000 / TICK_MS;

        Self {
            tui: TuiState {
                config,
                should_quit: false,
                screen,
                animate,
                subtitle: DecipherState::new(SUBTITLE, animate),
                gate: GateState::default(),
                contact: ContactState::default(),
                feed: FeedState::new(feed_ticks),
                headline: HeadlineState::new(headline_ticks),
                tasks: Tasks::default(),
                task_seq: TaskSeq::default(),
                rng,
            },
            overlay: None,
        }
    }

    pub fn is_on_main(&self) -> bool {
        matches!(self.tui.screen, Screen::Main)
    }
}
