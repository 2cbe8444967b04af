use crate::errors::RateError;
use crate::sources::ProviderFields;
use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;

pub const ASK_FIELD: &str = "totalAsk";
pub const BID_FIELD: &str = "totalBid";

/// Format used for the ledger's Timestamp column and the log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub timestamp: DateTime<Local>,
    pub source: &'static str,
    pub buy: f64,
    pub sell: f64,
}

impl RateQuote {
    /// Stamps a quote with the current local time.
    pub fn now(source: &'static str, buy: f64, sell: f64) -> Self {
        Self {
            timestamp: Local::now(),
            source,
            buy,
            sell,
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The provider sends amounts either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Reads (buy, sell) out of a provider object: buy is `totalAsk`, sell is `totalBid`.
pub fn parse_amounts(fields: &ProviderFields) -> Result<(f64, f64), RateError> {
    let buy = parse_amount(fields, ASK_FIELD)?;
    let sell = parse_amount(fields, BID_FIELD)?;
    Ok((buy, sell))
}

fn parse_amount(fields: &ProviderFields, field: &'static str) -> Result<f64, RateError> {
    let value = fields.get(field).ok_or(RateError::MissingField(field))?;

    let invalid = |value: &Value| RateError::InvalidNumber {
        field,
        value: value.to_string(),
    };

    let amount = match RawAmount::deserialize(value).map_err(|_| invalid(value))? {
        RawAmount::Number(n) => n,
        RawAmount::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid(value))?,
    };

    if !amount.is_finite() || amount < 0.0 {
        return Err(RateError::UnexpectedData(format!(
            "{field} must be a non-negative finite amount, got {amount}"
        )));
    }

    Ok(amount)
}

/// Renders an amount the way it appears in the ledger and on the labels:
/// shortest round-trip form, always with a decimal point (100 -> "100.0").
/// Very large or small amounts switch to exponent form without a sign or
/// zero padding in the exponent (`1e16`, `1e-5`).
pub fn format_amount(amount: f64) -> String {
    format!("{amount:?}")
}
