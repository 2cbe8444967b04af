use super::{ProviderFields, RateSource, extract_provider};
use crate::errors::RateError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every fetch with the same response body and counts the calls.
pub struct StubSource {
    body: Value,
    calls: Arc<AtomicUsize>,
}

impl StubSource {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, readable after the source has been boxed.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RateSource for StubSource {
    fn name(&self) -> &'static str {
        "buenbit"
    }

    async fn fetch(&self) -> Result<ProviderFields, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        extract_provider(self.body.clone(), self.name())
    }
}
