use axum::extract::{Extension, Json, State};
use std::sync::Arc;
use velosdrop_core::app_state::AppState;
use velosdrop_core::security::Claims;
use velosdrop_core::services::payment_service::PaymentService;
use velosdrop_primitives::error::{ApiError, ApiErrorResponse};
use velosdrop_primitives::models::{TopUpRequest, TopUpResponse};

#[utoipa::path(
    post,
    path = "/api/top_up",
    tag = "Wallet",
    summary = "Create a wallet top-up payment intent",
    description = "Creates a Stripe PaymentIntent for the authenticated driver and returns the \
                   client secret used to confirm the payment in the hosted payment UI. \
                   The driver id is taken from the bearer token, never from the request body. \
                   No balance changes here: the wallet is credited only when Stripe delivers \
                   `payment_intent.succeeded` to the webhook endpoint.",
    request_body = TopUpRequest,
    responses(
        (status = 200, description = "Payment intent created", body = TopUpResponse),
        (status = 400, description = "Invalid amount", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ApiErrorResponse),
        (status = 500, description = "Payment provider failure", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn top_up(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<TopUpRequest>,
) -> Result<Json<TopUpResponse>, ApiError> {
    let driver_id = claims.driver_id()?;

    let response = PaymentService::initiate_top_up(&state, driver_id, req).await?;

    Ok(Json(response))
}
