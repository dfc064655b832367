//! Telnyx client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelnyxError {
    #[error("API key must not be empty")]
    MissingApiKey,

    #[error("failed to parse webhook event: {0}")]
    Parse(#[from] serde_json::Error),
}
