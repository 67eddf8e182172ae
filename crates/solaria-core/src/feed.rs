//! Market feed model and parsing.
//!
//! The provider is asked to emit one `SYMBOL|PRICE|CHANGE` line per quote;
//! parsing is tolerant (bad lines are skipped) and any empty result falls
//! back to a fixed snapshot so the ticker never goes blank.

/// One market quote shown in the ticker tape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuote {
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub is_positive: bool,
}

/// Fallback snapshot used when the provider call fails or parses to nothing.
pub fn fallback_quotes() -> Vec<MarketQuote> {
    vec![
        MarketQuote {
            symbol: "BTC-USD".to_string(),
            price: "$98,500".to_string(),
            change: "+5.2%".to_string(),
            is_positive: true,
        },
        MarketQuote {
            symbol: "SOL-USD".to_string(),
            price: "$210.00".to_string(),
            change: "+1.2%".to_string(),
            is_positive: true,
        },
        MarketQuote {
            symbol: "NVDA".to_string(),
            price: "$145.20".to_string(),
            change: "-0.5%".to_string(),
            is_positive: false,
        },
    ]
}

/// Parses `SYMBOL|PRICE|CHANGE` lines into quotes, skipping malformed rows.
pub fn parse_quotes(text: &str) -> Vec<MarketQuote> {
    text.lines()
        .filter(|line| line.contains('|'))
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').map(str::trim).collect();
            if parts.len() < 3 || parts[0].is_empty() {
                return None;
            }
            let change = parts[2].to_string();
            Some(MarketQuote {
                symbol: parts[0].to_string(),
                price: parts[1].to_string(),
                is_positive: !change.contains('-'),
                change,
            })
        })
        .collect()
}
