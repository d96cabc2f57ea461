use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    health::health_check, stripe_webhook::stripe_webhook, top_up::top_up, wallet::get_wallet,
    wallet_updates::wallet_updates,
};
use axum::{middleware, response::IntoResponse, routing::get, routing::post, Router};
use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use velosdrop_core::app_state::AppState;
use velosdrop_core::security::SecurityConfig;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    // rate limiting configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    // public routes (no authentication)
    let public_router = create_public_routers(metric_handle);

    // protected routes (require JWT authentication)
    let protected_router = create_secured_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(middleware::from_fn(https_redirect_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // disable rate limiting in test environment to avoid "Unable To Extract Key!" errors
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}

fn create_secured_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/top_up", post(top_up))
        .route("/api/wallet", get(get_wallet))
        .route("/api/wallet/updates", get(wallet_updates))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_public_routers(metric_handle: PrometheusHandle) -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/webhook/stripe", post(stripe_webhook))
        .route("/api/health", get(health_check))
        .route("/metrics", get(move || async move { metric_handle.render() }))
}

async fn https_redirect_middleware(
    req: axum::extract::Request,
    next: middleware::Next,
) -> Result<axum::response::Response, (axum::http::StatusCode, String)> {
    // Check if we are in production
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        let headers = req.headers();
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok());

        if let Some("http") = proto {
            let host = headers
                .get("host")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");

            let uri = req.uri();
            let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
            let redirect_url = format!("https://{}{}", host, path_and_query);

            return Ok(axum::response::Redirect::permanent(&redirect_url).into_response());
        }
    }

    Ok(next.run(req).await)
}
