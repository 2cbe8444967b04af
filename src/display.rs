use crate::models::format_amount;
use std::io::{self, Stdout, Write};

/// Receives the latest buy/sell pair after every stored quote.
pub trait DisplaySink {
    fn publish(&mut self, buy: f64, sell: f64);
}

/// Last published values; `None` until the first successful poll.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayState {
    pub buy: Option<f64>,
    pub sell: Option<f64>,
}

impl DisplayState {
    pub fn buy_label(&self) -> String {
        label("Buy", self.buy)
    }

    pub fn sell_label(&self) -> String {
        label("Sell", self.sell)
    }
}

fn label(name: &str, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{name}: {}", format_amount(v)),
        None => format!("{name}: Fetching..."),
    }
}

/// Two text labels written to a terminal (or any writer).
/// Each render appends a fresh pair of lines rather than redrawing in place:
/// the log lines share stdout, and moving the cursor back would overwrite them.
pub struct TerminalDisplay<W: Write = Stdout> {
    state: DisplayState,
    out: W,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            state: DisplayState::default(),
            out,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Writes both labels with the current state below any earlier output.
    pub fn render(&mut self) {
        let result = writeln!(self.out, "{}", self.state.buy_label())
            .and_then(|_| writeln!(self.out, "{}", self.state.sell_label()))
            .and_then(|_| self.out.flush());

        if let Err(e) = result {
            tracing::warn!("[display] failed to render labels: {e}");
        }
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn publish(&mut self, buy: f64, sell: f64) {
        self.state = DisplayState {
            buy: Some(buy),
            sell: Some(sell),
        };
        self.render();
    }
}
