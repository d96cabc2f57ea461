use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use http::HeaderMap;
use std::sync::Arc;
use tracing::info;
use velosdrop_core::services::stripe_service::{AppState, StripeService, WebhookOutcome};
use velosdrop_primitives::error::{ApiError, ApiErrorResponse};
use velosdrop_primitives::models::WebhookAck;

#[utoipa::path(
    post,
    path = "/api/webhook/stripe",
    tag = "Webhooks",
    summary = "Receive and process Stripe webhook events",
    description = "Public endpoint receiving asynchronous event notifications from Stripe. \
                   The request signature is verified against the **raw** body using the \
                   `Stripe-Signature` header before anything is parsed; verification failure is a 400 \
                   and nothing is processed. Only `payment_intent.succeeded` has side effects: the \
                   driver named in the intent metadata is credited exactly once per payment intent, \
                   no matter how many times Stripe delivers the event. Every other event type is \
                   acknowledged without side effects. A 5xx response tells Stripe to redeliver, \
                   which is safe because processing is idempotent.",
    request_body(
        content = String,
        description = "Raw JSON payload of the Stripe event. Signature covers these exact bytes.",
    ),
    responses(
        (status = 200, description = "Event processed, already processed, ignored, or dropped", body = WebhookAck),
        (status = 400, description = "Missing or invalid signature", body = ApiErrorResponse),
        (status = 404, description = "Metadata names a driver that does not exist", body = ApiErrorResponse),
        (status = 500, description = "Persistence failure; Stripe will retry the delivery", body = ApiErrorResponse),
    ),
    security(()),
)]
pub async fn stripe_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    let event = StripeService::construct_event(&state, headers, &body)?;

    match StripeService::handle_event(&state, event)? {
        WebhookOutcome::Processed(outcome) => {
            info!("Stripe webhook processed: {:?}", outcome);
        }
        WebhookOutcome::Ignored => {
            info!("Stripe webhook ignored");
        }
    }

    Ok(Json(WebhookAck { received: true }))
}
