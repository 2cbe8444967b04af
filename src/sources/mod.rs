use crate::errors::RateError;
use async_trait::async_trait;
use serde_json::{Map, Value};

pub mod criptoya;
#[cfg(test)]
pub mod stub;

/// The provider's object from the response body. Empty when the provider
/// is not listed.
pub type ProviderFields = Map<String, Value>;

#[async_trait]
pub trait RateSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Performs a single request and returns the provider's fields.
    /// An empty map means "no data this time", anything else that goes
    /// wrong is an error.
    async fn fetch(&self) -> Result<ProviderFields, RateError>;
}

/// Picks the provider object out of a decoded response body.
/// A missing key or a falsy value (`null`, `false`, `0`, `""`, `[]`)
/// yields an empty map.
pub fn extract_provider(body: Value, provider: &str) -> Result<ProviderFields, RateError> {
    let mut root = match body {
        Value::Object(root) => root,
        other => {
            return Err(RateError::UnexpectedData(format!(
                "expected a JSON object, got {other}"
            )));
        }
    };

    match root.remove(provider) {
        None => Ok(Map::new()),
        Some(Value::Object(fields)) => Ok(fields),
        Some(other) if is_falsy(&other) => Ok(Map::new()),
        Some(other) => Err(RateError::UnexpectedData(format!(
            "{provider} entry is not an object: {other}"
        ))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
