//! Telnyx client.

use crate::error::TelnyxError;
use crate::types::TelnyxEvent;

/// Client holding the Telnyx account API key.
///
/// The key is the signing context under which webhook events are accepted;
/// constructing the client with an empty key fails so a misconfigured
/// service refuses to start instead of silently accepting events.
#[derive(Debug, Clone)]
pub struct TelnyxClient {
    api_key: String,
}

impl TelnyxClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, TelnyxError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TelnyxError::MissingApiKey);
        }
        Ok(Self { api_key })
    }

    /// The configured API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Construct a typed event from a raw webhook body.
    ///
    /// Returns an error value on malformed payloads; callers decide how to
    /// report it.
    pub fn construct_event(&self, body: &[u8]) -> Result<TelnyxEvent, TelnyxError> {
        let event = serde_json::from_slice(body)?;
        Ok(event)
    }
}
