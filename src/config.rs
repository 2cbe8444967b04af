use std::path::PathBuf;
use std::time::Duration;

pub const ENDPOINT: &str = "https://criptoya.com/api/usdt/ars";
pub const PROVIDER: &str = "buenbit";
pub const LEDGER_FILE: &str = "exchange_rates.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub provider: &'static str,
    pub ledger_path: PathBuf,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Fixed polling setup: one provider, one ledger in the working directory.
    /// Nothing here is read from the environment.
    pub fn new() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            provider: PROVIDER,
            ledger_path: PathBuf::from(LEDGER_FILE),
            poll_interval: Duration::from_secs(30),
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
