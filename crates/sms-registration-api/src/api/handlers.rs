//! HTTP request handlers.

use super::types::{CreateUserRequest, HealthResponse, WebhookAck};
use super::AppState;
use crate::error::ApiError;
use crate::store::{NewUser, User};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{debug, error, info, warn};

/// Health check endpoint.
///
/// Answers statically, without touching the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "SMS registration API is running".to_string(),
    })
}

/// Register a user directly.
///
/// The phone number must not be registered yet; a duplicate fails with a
/// client error before any write happens.
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    info!(phone_number = %request.phone_number, "registration request received");

    if state
        .store
        .find_by_phone(&request.phone_number)
        .await?
        .is_some()
    {
        warn!(phone_number = %request.phone_number, "phone number already registered");
        return Err(ApiError::DuplicatePhoneNumber(request.phone_number));
    }

    let user = state.store.create(NewUser::from(request)).await?;
    info!(user_id = user.id, phone_number = %user.phone_number, "user registered");

    Ok(Json(user))
}

/// Inbound Telnyx webhook.
///
/// Always acknowledges with HTTP 200: the provider redelivers on any
/// non-2xx response, so failures are logged and reported in the ack body
/// instead of the status code. This covers parse failures and store
/// failures alike, including the losing side of a duplicate-insert race.
pub async fn telnyx_webhook(State(state): State<AppState>, body: Bytes) -> Json<WebhookAck> {
    match process_inbound_event(&state, &body).await {
        Ok(ack) => Json(ack),
        Err(e) => {
            error!(error = %e, "webhook processing failed");
            Json(WebhookAck::error(e.to_string()))
        }
    }
}

/// Handle one inbound event: look the sender up and create a user on first
/// contact. Exactly one insert per genuinely new phone number; nothing is
/// sent back to the sender.
async fn process_inbound_event(state: &AppState, body: &[u8]) -> Result<WebhookAck, ApiError> {
    let event = state.telnyx.construct_event(body)?;

    if !event.is_message_received() {
        debug!(event_type = %event.data.event_type, "ignoring non-message event");
        return Ok(WebhookAck::ok());
    }

    let payload = event.data.payload.as_ref();
    let Some(from_number) = payload.and_then(|p| p.sender_number()) else {
        warn!("received message without a sender phone number");
        return Ok(WebhookAck::error("missing sender phone number"));
    };
    let text = payload.map(|p| p.body_text()).unwrap_or_default();
    debug!(from = %from_number, text = %text, "inbound message");

    match state.store.find_by_phone(from_number).await? {
        Some(user) => {
            debug!(user_id = user.id, phone_number = %user.phone_number, "user already exists");
        }
        None => {
            let user = state.store.create(NewUser::from_phone(from_number)).await?;
            info!(
                user_id = user.id,
                phone_number = %user.phone_number,
                "created user from inbound message"
            );
        }
    }

    Ok(WebhookAck::ok())
}
