//! `solaria feed`: one-shot market snapshot on stdout.

use anyhow::Result;
use solaria_core::config::Config;
use solaria_core::feed::{MarketQuote, fallback_quotes};
use solaria_core::providers::gemini::{GeminiClient, GeminiConfig};

pub async fn run(config: &Config) -> Result<()> {
    let quotes = match GeminiConfig::from_config(config) {
        Ok(gemini) => GeminiClient::new(gemini).market_snapshot().await,
        Err(_) => fallback_quotes(),
    };

    for quote in &quotes {
        println!("{}", format_quote(quote));
    }
    Ok(())
}

fn format_quote(quote: &MarketQuote) -> String {
    let direction = if quote.is_positive { '▲' } else { '▼' };
    format!(
        "{:<10} {:>12} {} {}",
        quote.symbol, quote.price, direction, quote.change
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quote_alignment() {
        let quote = MarketQuote {
            symbol: "NVDA".to_string(),
            price: "$120.50".to_string(),
            change: "+2.5%".to_string(),
            is_positive: true,
        };
        assert_eq!(format_quote(&quote), "NVDA            $120.50 ▲ +2.5%");
    }
}
