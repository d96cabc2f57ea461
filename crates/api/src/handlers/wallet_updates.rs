use axum::extract::{Extension, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::{Stream, StreamExt};
use velosdrop_core::app_state::AppState;
use velosdrop_core::security::Claims;
use velosdrop_primitives::error::ApiError;

/// Keep-alive doubles as the fallback cadence for clients that missed an
/// update: they re-read the wallet on every tick.
const KEEP_ALIVE_SECS: u64 = 30;

#[utoipa::path(
    get,
    path = "/api/wallet/updates",
    tag = "Wallet",
    summary = "Subscribe to balance-update events",
    description = "Server-sent event stream of `balance-update` events `{driverId, amount}` for the \
                   authenticated driver. Events are refresh triggers only; consumers re-read \
                   `/api/wallet` for authoritative state. Closing the connection tears the \
                   subscription down.",
    responses(
        (status = 200, description = "SSE stream of balance-update events"),
        (status = 401, description = "Missing or invalid bearer token"),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn wallet_updates(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let driver_id = claims.driver_id()?;

    let subscription = state.balance_updates.subscribe(driver_id);

    let stream = subscription.into_stream().filter_map(|update| {
        Event::default()
            .event("balance-update")
            .json_data(&update)
            .ok()
            .map(Ok)
    });

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(KEEP_ALIVE_SECS))
            .text("keep-alive"),
    ))
}
