//! Ticker-tape and headline state for the main screen.

use solaria_core::feed::MarketQuote;

use super::timer::RefreshTimer;

/// Placeholder shown in the ticker bar until the first snapshot lands.
pub const FEED_PLACEHOLDER: &str = "INITIALIZING DATA STREAM...";

/// Placeholder shown in the headline box until the first headline lands.
pub const HEADLINE_PLACEHOLDER: &str = "INITIALIZING NEWS FEED...";

#[derive(Debug, Clone)]
pub struct FeedState {
    pub quotes: Vec<MarketQuote>,
    pub loading: bool,
    /// Marquee scroll position, in characters.
    pub offset: usize,
    timer: RefreshTimer,
}

impl FeedState {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            quotes: Vec::new(),
            loading: false,
            offset: 0,
            timer: RefreshTimer::new(interval_ticks),
        }
    }

    /// Advances the marquee and countdown. Returns true when a refresh is
    /// due (never while one is already in flight).
    pub fn tick(&mut self) -> bool {
        self.offset = self.offset.wrapping_add(1);
        let due = self.timer.tick();
        due && !self.loading
    }

    pub fn on_loaded(&mut self, quotes: Vec<MarketQuote>) {
        self.quotes = quotes;
        self.loading = false;
        self.timer.rearm();
    }

    /// Single line of ticker text, cycled by the marquee.
    pub fn tape(&self) -> String {
        let mut tape = String::new();
        for quote in &self.quotes {
            let arrow = if quote.is_positive { '▲' } else { '▼' };
            tape.push_str(&format!(
                " {} {} {}{}  •",
                quote.symbol, quote.price, arrow, quote.change
            ));
        }
        tape
    }
}

#[derive(Debug, Clone)]
pub struct HeadlineState {
    pub text: String,
    pub loading: bool,
    timer: RefreshTimer,
}

impl HeadlineState {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            text: HEADLINE_PLACEHOLDER.to_string(),
            loading: false,
            timer: RefreshTimer::new(interval_ticks),
        }
    }

    pub fn tick(&mut self) -> bool {
        let due = self.timer.tick();
        due && !self.loading
    }

    pub fn on_loaded(&mut self, text: String) {
        self.text = text;
        self.loading = false;
        self.timer.rearm();
    }
}
