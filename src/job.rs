use crate::display::DisplaySink;
use crate::ledger::Ledger;
use crate::models::{RateQuote, format_amount, parse_amounts};
use crate::sources::RateSource;
use anyhow::Context;

/// One poll: fetch, store, publish.
pub struct PollingJob<D> {
    source: Box<dyn RateSource>,
    ledger: Ledger,
    display: D,
}

impl<D: DisplaySink> PollingJob<D> {
    pub fn new(source: Box<dyn RateSource>, ledger: Ledger, display: D) -> Self {
        Self {
            source,
            ledger,
            display,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[cfg(test)]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the stored quote, or `None` when the provider had no entry.
    /// The ledger is written before the display is touched, so a failed
    /// write leaves the labels as they were.
    pub async fn run(&mut self) -> anyhow::Result<Option<RateQuote>> {
        let name = self.source.name();

        let fields = self
            .source
            .fetch()
            .await
            .with_context(|| format!("[{name}] fetch failed"))?;

        if fields.is_empty() {
            tracing::debug!("[{name}] no quote in response, skipping this poll");
            return Ok(None);
        }

        let (buy, sell) = parse_amounts(&fields)
            .with_context(|| format!("[{name}] malformed quote"))?;
        let quote = RateQuote::now(name, buy, sell);

        self.ledger.append(&quote).with_context(|| {
            format!("failed to append to {}", self.ledger.path().display())
        })?;
        self.display.publish(buy, sell);

        let at = quote.formatted_timestamp();
        tracing::info!("Stored new buy: {} at {}", format_amount(buy), at);
        tracing::info!("Stored new sell: {} at {}", format_amount(sell), at);

        Ok(Some(quote))
    }
}
