mod common;

use axum_test::TestServer;
use common::fixtures::{create_test_driver, payment_intent_object};
use common::{auth_token_for, cleanup_test_db, create_test_app, create_test_app_state};
use http::StatusCode;
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use velosdrop_core::app_state::AppState;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// AppState whose Stripe client points at the mock server.
fn state_with_stripe_url(url: &str) -> Arc<AppState> {
    // run migrations / one-time setup first
    let _ = create_test_app_state();

    let mut config = common::test_app_config();
    config.stripe_details.stripe_api_url = url.to_string();
    AppState::new(common::create_test_db_pool(), config)
}

#[tokio::test]
#[serial]
async fn test_top_up_returns_client_secret() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(body_string_contains("amount=1000"))
        .and(body_string_contains("driver_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payment_intent_object(
            "pi_test_issue",
            1000,
            "requires_payment_method",
            json!({ "driver_id": "1" }),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = state_with_stripe_url(&mock_server.uri());
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 0);
    }

    let server = TestServer::new(create_test_app(state.clone())).unwrap();
    let token = auth_token_for(&state, driver_id);

    let response = server
        .post("/api/top_up")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "amount": 1000 }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["paymentIntentId"], "pi_test_issue");
    assert!(!body["clientSecret"].as_str().unwrap().is_empty());
    assert_eq!(body["amount"], 1000);
}

#[tokio::test]
#[serial]
async fn test_top_up_rejects_non_positive_amount() {
    // no mock mounted: a provider call would fail loudly
    let mock_server = MockServer::start().await;
    let state = state_with_stripe_url(&mock_server.uri());
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 0);
    }

    let server = TestServer::new(create_test_app(state.clone())).unwrap();
    let token = auth_token_for(&state, driver_id);

    for amount in [0, -500] {
        let response = server
            .post("/api/top_up")
            .add_header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "amount": amount }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    assert_eq!(mock_server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn test_top_up_requires_auth() {
    let mock_server = MockServer::start().await;
    let state = state_with_stripe_url(&mock_server.uri());

    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.post("/api/top_up").json(&json!({ "amount": 1000 })).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_top_up_surfaces_provider_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "type": "api_error", "message": "stripe exploded" }
        })))
        .mount(&mock_server)
        .await;

    let state = state_with_stripe_url(&mock_server.uri());
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 0);
    }

    let server = TestServer::new(create_test_app(state.clone())).unwrap();
    let token = auth_token_for(&state, driver_id);

    let response = server
        .post("/api/top_up")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "amount": 1000 }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
