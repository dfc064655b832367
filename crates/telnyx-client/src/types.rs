//! Telnyx webhook event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event type reported for an inbound SMS delivery.
pub const EVENT_MESSAGE_RECEIVED: &str = "message.received";

/// Top-level webhook envelope.
///
/// Telnyx wraps every webhook notification in a `data` object carrying the
/// event type and the event-specific payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelnyxEvent {
    pub data: EventData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventData {
    pub event_type: String,
    pub id: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub payload: Option<MessagePayload>,
}

/// Payload of a messaging event.
///
/// Fields are optional because the same envelope carries several event
/// types; only `message.received` is guaranteed to populate the sender.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagePayload {
    pub id: Option<String>,
    pub from: Option<PhoneParty>,
    #[serde(default)]
    pub to: Vec<PhoneParty>,
    pub text: Option<String>,
}

/// One end of a message: a phone number plus carrier metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhoneParty {
    pub phone_number: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
}

impl TelnyxEvent {
    /// Whether this event is an inbound SMS delivery notification.
    pub fn is_message_received(&self) -> bool {
        self.data.event_type == EVENT_MESSAGE_RECEIVED
    }
}

impl MessagePayload {
    /// The sender's phone number, if the provider included one.
    pub fn sender_number(&self) -> Option<&str> {
        self.from.as_ref()?.phone_number.as_deref()
    }

    /// Trimmed message text; empty when the payload carried none.
    pub fn body_text(&self) -> &str {
        self.text.as_deref().map(str::trim).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbound_json() -> &'static str {
        r#"{
            "data": {
                "event_type": "message.received",
                "id": "3f2b1c60-9d2e-4b52-8f71-abc123def456",
                "occurred_at": "2025-03-14T09:26:53Z",
                "payload": {
                    "id": "msg-9001",
                    "from": {
                        "phone_number": "+15550001111",
                        "carrier": "T-Mobile",
                        "line_type": "Wireless"
                    },
                    "to": [{"phone_number": "+15550002222", "carrier": null, "line_type": null}],
                    "text": "  START  "
                }
            }
        }"#
    }

    #[test]
    fn parses_inbound_message_event() {
        let event: TelnyxEvent = serde_json::from_str(inbound_json()).unwrap();

        assert!(event.is_message_received());
        let payload = event.data.payload.as_ref().unwrap();
        assert_eq!(payload.sender_number(), Some("+15550001111"));
        assert_eq!(payload.body_text(), "START");
        assert!(event.data.occurred_at.is_some());
    }

    #[test]
    fn tolerates_missing_sender() {
        let json = r#"{
            "data": {
                "event_type": "message.received",
                "id": null,
                "occurred_at": null,
                "payload": {"id": null, "from": null, "to": [], "text": "hi"}
            }
        }"#;
        let event: TelnyxEvent = serde_json::from_str(json).unwrap();

        let payload = event.data.payload.as_ref().unwrap();
        assert_eq!(payload.sender_number(), None);
        assert_eq!(payload.body_text(), "hi");
    }

    #[test]
    fn other_event_types_parse_without_payload() {
        let json = r#"{"data": {"event_type": "message.finalized"}}"#;
        let event: TelnyxEvent = serde_json::from_str(json).unwrap();

        assert!(!event.is_message_received());
        assert!(event.data.payload.is_none());
    }
}
