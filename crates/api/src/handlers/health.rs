use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use std::sync::Arc;
use tracing::error;
use velosdrop_core::app_state::AppState;
use velosdrop_primitives::models::HealthStatus;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    summary = "Health check endpoint",
    description = "Returns 200 with a healthy status when the service can reach the database. \
                   Public, fast, no side effects.",
    responses(
        (status = 200, description = "Service is healthy and operational", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = HealthStatus),
    ),
    security(()),
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    match state.db.get() {
        Ok(mut conn) => match diesel::sql_query("SELECT 1").execute(&mut conn) {
            Ok(_) => Json(HealthStatus {
                status: StatusCode::OK.to_string(),
                message: "API is healthy".to_string(),
            }),
            Err(e) => {
                error!("Health check DB query failed: {}", e);
                Json(HealthStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE.to_string(),
                    message: "Health check DB query failed".to_string(),
                })
            }
        },
        Err(e) => {
            error!("Health check DB connection failed: {}", e);
            Json(HealthStatus {
                status: StatusCode::SERVICE_UNAVAILABLE.to_string(),
                message: "Health check DB connection failed".to_string(),
            })
        }
    }
}
