use axum::extract::{Extension, State};
use axum::Json;
use std::sync::Arc;
use velosdrop_core::app_state::AppState;
use velosdrop_core::security::Claims;
use velosdrop_core::services::wallet_service::WalletService;
use velosdrop_primitives::error::{ApiError, ApiErrorResponse};
use velosdrop_primitives::models::WalletResponse;

#[utoipa::path(
    get,
    path = "/api/wallet",
    tag = "Wallet",
    summary = "Current balance and recent transactions",
    responses(
        (status = 200, description = "Wallet snapshot, transactions newest first", body = WalletResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ApiErrorResponse),
        (status = 404, description = "Driver not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_wallet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<WalletResponse>, ApiError> {
    let driver_id = claims.driver_id()?;

    let snapshot = WalletService::wallet_snapshot(&state, driver_id)?;

    Ok(Json(snapshot))
}
