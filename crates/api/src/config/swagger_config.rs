use crate::handlers::{
    health::__path_health_check, stripe_webhook::__path_stripe_webhook, top_up::__path_top_up,
    wallet::__path_get_wallet, wallet_updates::__path_wallet_updates,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use velosdrop_primitives::error::ApiErrorResponse;
use velosdrop_primitives::models::{
    BalanceUpdate, HealthStatus, TopUpRequest, TopUpResponse, TransactionDto, TransactionStatus,
    WalletResponse, WebhookAck,
};

#[derive(OpenApi)]
#[openapi(
    paths(top_up, stripe_webhook, get_wallet, wallet_updates, health_check),
    components(schemas(
        TopUpRequest,
        TopUpResponse,
        WalletResponse,
        TransactionDto,
        TransactionStatus,
        BalanceUpdate,
        WebhookAck,
        HealthStatus,
        ApiErrorResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Wallet", description = "Driver wallet top-ups and balance reads"),
        (name = "Webhooks", description = "Payment provider notifications"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Define the security scheme in components.securitySchemes
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
