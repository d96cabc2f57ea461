mod common;

use common::fixtures::create_test_driver;
use common::{cleanup_test_db, create_test_app_state};
use diesel::prelude::*;
use serial_test::serial;
use velosdrop_core::services::transaction_service::{CreditOutcome, TransactionService};
use velosdrop_primitives::schema::{driver_transactions, drivers};

fn driver_balance(conn: &mut diesel::PgConnection, driver_id: i64) -> i64 {
    drivers::table
        .find(driver_id)
        .select(drivers::balance)
        .first::<i64>(conn)
        .unwrap()
}

#[tokio::test]
#[serial]
async fn test_apply_credit_twice_writes_once() {
    let state = create_test_app_state();
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 500);
    }

    let first = TransactionService::apply_credit(&state, driver_id, 1000, "pi_dup_check").unwrap();
    assert_eq!(first, CreditOutcome::Credited);

    let second = TransactionService::apply_credit(&state, driver_id, 1000, "pi_dup_check").unwrap();
    assert_eq!(second, CreditOutcome::AlreadyProcessed);

    let mut conn = state.db.get().unwrap();
    assert_eq!(driver_balance(&mut conn, driver_id), 1500);

    let count = driver_transactions::table
        .filter(driver_transactions::payment_intent_id.eq("pi_dup_check"))
        .count()
        .get_result::<i64>(&mut conn)
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[serial]
async fn test_concurrent_credits_never_lose_an_update() {
    let state = create_test_app_state();
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 500);
    }

    // two distinct payments racing for the same driver
    let state_a = state.clone();
    let a = tokio::task::spawn_blocking(move || {
        TransactionService::apply_credit(&state_a, driver_id, 700, "pi_race_a")
    });
    let state_b = state.clone();
    let b = tokio::task::spawn_blocking(move || {
        TransactionService::apply_credit(&state_b, driver_id, 300, "pi_race_b")
    });

    assert_eq!(a.await.unwrap().unwrap(), CreditOutcome::Credited);
    assert_eq!(b.await.unwrap().unwrap(), CreditOutcome::Credited);

    let mut conn = state.db.get().unwrap();
    assert_eq!(driver_balance(&mut conn, driver_id), 1500);

    let count = driver_transactions::table
        .filter(driver_transactions::driver_id.eq(driver_id))
        .count()
        .get_result::<i64>(&mut conn)
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
#[serial]
async fn test_concurrent_duplicate_delivery_credits_once() {
    let state = create_test_app_state();
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 0);
    }

    let state_a = state.clone();
    let a = tokio::task::spawn_blocking(move || {
        TransactionService::apply_credit(&state_a, driver_id, 1000, "pi_same_delivery")
    });
    let state_b = state.clone();
    let b = tokio::task::spawn_blocking(move || {
        TransactionService::apply_credit(&state_b, driver_id, 1000, "pi_same_delivery")
    });

    let outcomes = [a.await.unwrap().unwrap(), b.await.unwrap().unwrap()];
    assert!(outcomes.contains(&CreditOutcome::Credited));
    assert!(outcomes.contains(&CreditOutcome::AlreadyProcessed));

    let mut conn = state.db.get().unwrap();
    assert_eq!(driver_balance(&mut conn, driver_id), 1000);

    let count = driver_transactions::table
        .filter(driver_transactions::payment_intent_id.eq("pi_same_delivery"))
        .count()
        .get_result::<i64>(&mut conn)
        .unwrap();
    assert_eq!(count, 1);
}
