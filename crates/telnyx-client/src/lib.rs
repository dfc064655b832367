//! Telnyx messaging webhook integration.
//!
//! Telnyx delivers inbound SMS notifications as JSON webhook events. This
//! crate provides the event envelope types and a small client that holds the
//! account API key and constructs typed events from raw webhook bodies.
//! Cryptographic verification of the `telnyx-signature-ed25519` header is
//! the transport layer's concern and is not performed here.

pub mod client;
pub mod error;
pub mod types;

pub use client::TelnyxClient;
pub use error::TelnyxError;
pub use types::{EventData, MessagePayload, PhoneParty, TelnyxEvent, EVENT_MESSAGE_RECEIVED};
