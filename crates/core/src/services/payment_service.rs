use tracing::info;
use validator::Validate;

pub use crate::app_state::AppState;
pub use velosdrop_primitives::{
    error::ApiError,
    models::{TopUpRequest, TopUpResponse},
};

pub struct PaymentService;

impl PaymentService {
    /// Issues a charge intent for the acting driver. Never touches the
    /// ledger: the balance moves only when the provider confirms the payment
    /// through the webhook.
    pub async fn initiate_top_up(
        state: &AppState,
        driver_id: i64,
        req: TopUpRequest,
    ) -> Result<TopUpResponse, ApiError> {
        req.validate()?;

        let intent = state
            .stripe
            .create_payment_intent(req.amount, driver_id)
            .await?;

        let client_secret = intent
            .client_secret
            .clone()
            .ok_or_else(|| ApiError::Payment("PaymentIntent missing client secret".into()))?;

        info!(
            "top_up: intent {} created for driver {} ({} cents)",
            intent.id, driver_id, req.amount
        );

        Ok(TopUpResponse {
            client_secret,
            payment_intent_id: intent.id.to_string(),
            amount: req.amount,
        })
    }
}
