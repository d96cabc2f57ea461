use secrecy::ExposeSecret;
use std::collections::HashMap;
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent,
};
use velosdrop_primitives::config::StripeInfo;
use velosdrop_primitives::error::ApiError;

/// Top-ups charge in USD only; the ledger is single-currency.
const TOP_UP_CURRENCY: Currency = Currency::USD;

#[derive(Clone)]
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    pub fn new(config: &StripeInfo) -> Self {
        let client = Client::from_url(
            config.stripe_api_url.as_str(),
            config.stripe_secret_key.expose_secret(),
        );
        Self { client }
    }

    /// Creates a client-confirmable PaymentIntent tagged with the driver id.
    /// The webhook path relies on that metadata to route the credit, so it
    /// is written here and nowhere else.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        driver_id: i64,
    ) -> Result<PaymentIntent, ApiError> {
        let mut metadata = HashMap::new();
        metadata.insert("driver_id".to_string(), driver_id.to_string());

        let mut params = CreatePaymentIntent::new(amount, TOP_UP_CURRENCY);
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            enabled: true,
            ..Default::default()
        });
        params.metadata = Some(metadata);

        PaymentIntent::create(&self.client, params)
            .await
            .map_err(|e| ApiError::Payment(format!("Stripe error: {}", e)))
    }
}
