//! HTTP surface
//!
//! - `GET /` greets with the application ID (liveness check)
//! - `POST /` is the Discord interactions endpoint
//! - everything else is `404 Not Found.`

use crate::adapters::WebhookSender;
use crate::bridge::interaction_bridge::InteractionBridge;
use crate::bridge::interaction_reply::{ErrorBody, InteractionReply};
use crate::bridge::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER, VerifyError, verify_request};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use ed25519_dalek::VerifyingKey;
use std::sync::Arc;
use tracing::warn;

const BAD_SIGNATURE: &str = "Bad request signature.";
const INVALID_PAYLOAD: &str = "Invalid interaction payload";
const NOT_FOUND: &str = "Not Found.";

/// Shared, read-only state of the interactions endpoint
pub struct AppState<S>
where
    S: WebhookSender,
{
    application_id: Arc<str>,
    public_key: VerifyingKey,
    bridge: Arc<InteractionBridge<S>>,
}

impl<S> Clone for AppState<S>
where
    S: WebhookSender,
{
    fn clone(&self) -> Self {
        Self {
            application_id: Arc::clone(&self.application_id),
            public_key: self.public_key,
            bridge: Arc::clone(&self.bridge),
        }
    }
}

impl<S> AppState<S>
where
    S: WebhookSender,
{
    /// Create a new AppState
    ///
    /// # Arguments
    ///
    /// * `application_id` - Shown on the greeting page
    /// * `public_key` - Key interaction requests are verified against
    /// * `bridge` - Dispatcher for verified interactions
    pub fn new(
        application_id: impl Into<Arc<str>>,
        public_key: VerifyingKey,
        bridge: InteractionBridge<S>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            public_key,
            bridge: Arc::new(bridge),
        }
    }
}

pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: WebhookSender + 'static,
{
    Router::new()
        .route(
            "/",
            get(hello::<S>)
                .post(handle_interaction::<S>)
                .fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn hello<S>(State(state): State<AppState<S>>) -> String
where
    S: WebhookSender + 'static,
{
    format!("👋 {}", state.application_id)
}

async fn handle_interaction<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: WebhookSender + 'static,
{
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
    let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|v| v.to_str().ok());

    let interaction = match verify_request(&body, signature, timestamp, &state.public_key) {
        Ok(interaction) => interaction,
        Err(VerifyError::MalformedPayload(err)) => {
            warn!(%err, "Signed request body is not a valid interaction");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: INVALID_PAYLOAD,
                }),
            )
                .into_response();
        }
        Err(err) => {
            warn!(%err, "Rejecting interaction request");
            return (StatusCode::UNAUTHORIZED, BAD_SIGNATURE).into_response();
        }
    };

    state.bridge.dispatch(&interaction).await.into_response()
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND)
}

impl IntoResponse for InteractionReply {
    fn into_response(self) -> Response {
        if let Some(response) = self.response() {
            return Json(response).into_response();
        }

        let error = self.error_message().unwrap_or(INVALID_PAYLOAD);
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
    }
}
