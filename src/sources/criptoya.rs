use super::{ProviderFields, RateSource, extract_provider};
use crate::config::Config;
use crate::errors::RateError;
use async_trait::async_trait;
use serde_json::Value;

/// USDT/ARS quotes from criptoya.com, narrowed down to one provider.
pub struct CriptoYa {
    client: reqwest::Client,
    endpoint: String,
    provider: &'static str,
}

impl CriptoYa {
    pub fn new(config: &Config) -> Result<Self, RateError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            provider: config.provider,
        })
    }
}

#[async_trait]
impl RateSource for CriptoYa {
    fn name(&self) -> &'static str {
        self.provider
    }

    /// The status code is not inspected: whatever comes back must decode
    /// as JSON, otherwise the call fails with a parse error.
    async fn fetch(&self) -> Result<ProviderFields, RateError> {
        tracing::debug!("[{}] GET {}", self.provider, self.endpoint);

        let bytes = self.client.get(&self.endpoint).send().await?.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        extract_provider(body, self.provider)
    }
}
