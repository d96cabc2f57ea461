use diesel::prelude::*;
use diesel::PgConnection;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use velosdrop_primitives::schema::drivers;

/// Insert a driver row with the given starting balance, returning its id.
#[allow(dead_code)]
pub fn create_test_driver(conn: &mut PgConnection, balance: i64) -> i64 {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let email = format!(
        "{}.{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        uuid_suffix()
    );

    diesel::insert_into(drivers::table)
        .values((
            drivers::first_name.eq(first_name),
            drivers::last_name.eq(last_name),
            drivers::email.eq(email),
            drivers::phone_number.eq("+15550100"),
            drivers::balance.eq(balance),
        ))
        .returning(drivers::id)
        .get_result::<i64>(conn)
        .expect("Failed to insert test driver")
}

fn uuid_suffix() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    format!(
        "{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

/// `Stripe-Signature` header value for a payload, signed the way Stripe
/// signs deliveries: `HMAC-SHA256(secret, "{timestamp}.{payload}")`.
#[allow(dead_code)]
pub fn stripe_signature(payload: &str, secret: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp();
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(format!("{}.{}", timestamp, payload).as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());
    format!("t={},v1={}", timestamp, signature)
}

/// A payment intent object the Stripe SDK can deserialize.
#[allow(dead_code)]
pub fn payment_intent_object(
    payment_intent_id: &str,
    amount: i64,
    status: &str,
    metadata: serde_json::Value,
) -> serde_json::Value {
    json!({
        "id": payment_intent_id,
        "object": "payment_intent",
        "amount": amount,
        "amount_capturable": 0,
        "amount_received": if status == "succeeded" { amount } else { 0 },
        "capture_method": "automatic",
        "client_secret": format!("{}_secret_test", payment_intent_id),
        "confirmation_method": "automatic",
        "created": chrono::Utc::now().timestamp(),
        "currency": "usd",
        "livemode": false,
        "metadata": metadata,
        "payment_method_types": ["card"],
        "status": status
    })
}

/// Minimal but complete Stripe event payload wrapping a payment intent.
#[allow(dead_code)]
pub fn payment_intent_event(
    event_type: &str,
    payment_intent_id: &str,
    amount: i64,
    metadata: serde_json::Value,
) -> String {
    json!({
        "id": format!("evt_{}", uuid_suffix().replace('-', "")),
        "object": "event",
        "api_version": "2023-10-16",
        "created": chrono::Utc::now().timestamp(),
        "data": {
            "object": payment_intent_object(payment_intent_id, amount, "succeeded", metadata)
        },
        "livemode": false,
        "pending_webhooks": 1,
        "type": event_type
    })
    .to_string()
}
