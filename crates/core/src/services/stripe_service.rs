use axum::body::Bytes;
use http::HeaderMap;
use secrecy::ExposeSecret;
use std::sync::Arc;
use stripe::{Event, EventObject, EventType, Webhook};
use tracing::info;

pub use crate::app_state::AppState;
use crate::services::transaction_service::{CreditOutcome, TransactionService};
pub use velosdrop_primitives::error::ApiError;

pub enum WebhookOutcome {
    Processed(CreditOutcome),
    Ignored,
}

pub struct StripeService;

impl StripeService {
    /// Signature covers the raw bytes; the body must reach this point
    /// unparsed. Verification failure is a client error and nothing is
    /// processed.
    pub fn construct_event(
        state: &Arc<AppState>,
        headers: HeaderMap,
        body: &Bytes,
    ) -> Result<Event, ApiError> {
        let signature = headers
            .get("stripe-signature")
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::BadRequest("Missing Stripe signature".into()))?;

        let payload = std::str::from_utf8(body)
            .map_err(|_| ApiError::BadRequest("Invalid UTF-8 payload".into()))?;

        Webhook::construct_event(
            payload,
            signature,
            state
                .config
                .stripe_details
                .stripe_webhook_secret
                .expose_secret(),
        )
        .map_err(ApiError::Webhook)
    }

    /// Only `payment_intent.succeeded` carries a credit. Every other event
    /// type is acknowledged without side effects so the provider does not
    /// keep retrying events we intentionally ignore.
    pub fn handle_event(state: &Arc<AppState>, event: Event) -> Result<WebhookOutcome, ApiError> {
        match event.type_ {
            EventType::PaymentIntentSucceeded => {
                let EventObject::PaymentIntent(pay_int) = event.data.object else {
                    return Err(ApiError::BadRequest("Invalid PaymentIntent object".into()));
                };

                let outcome = TransactionService::record_top_up(state, &pay_int)?;
                Ok(WebhookOutcome::Processed(outcome))
            }

            other => {
                info!("webhook.event: ignoring {}", other);
                Ok(WebhookOutcome::Ignored)
            }
        }
    }
}
