//! API request and response types.

use crate::store::{NewUser, DEFAULT_CHANNEL_PREFERENCE};
use serde::{Deserialize, Serialize};

/// Request to register a user directly.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Phone number, the unique lookup key
    pub phone_number: String,

    /// Optional contact email, unique when present
    pub email: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    /// Preferred notification channel
    #[serde(default = "default_channel_preference")]
    pub channel_preference: String,
}

fn default_channel_preference() -> String {
    DEFAULT_CHANNEL_PREFERENCE.to_string()
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            phone_number: request.phone_number,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            channel_preference: request.channel_preference,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Acknowledgment returned to the provider for every webhook delivery.
///
/// The HTTP status is always 200; failure is reported only through the
/// `detail` field so the provider does not redeliver.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            detail: None,
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            status: "error",
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_ack_omits_detail() {
        let json = serde_json::to_string(&WebhookAck::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn error_ack_carries_detail() {
        let json = serde_json::to_string(&WebhookAck::error("missing sender phone number")).unwrap();
        assert_eq!(
            json,
            r#"{"status":"error","detail":"missing sender phone number"}"#
        );
    }

    #[test]
    fn channel_preference_defaults_to_sms() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"phone_number": "+15550001111"}"#).unwrap();
        assert_eq!(request.channel_preference, DEFAULT_CHANNEL_PREFERENCE);
        assert!(request.email.is_none());
    }
}
