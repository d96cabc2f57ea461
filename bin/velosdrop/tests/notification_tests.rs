mod common;

use common::fixtures::create_test_driver;
use common::{cleanup_test_db, create_test_app_state};
use serial_test::serial;
use std::time::Duration;
use tokio::time::timeout;
use velosdrop_core::notifications::{BalanceUpdate, BalanceUpdates};
use velosdrop_core::services::transaction_service::TransactionService;

#[tokio::test]
async fn test_subscribers_receive_updates_for_their_driver_only() {
    let updates = BalanceUpdates::new(8);

    let mut sub_a = updates.subscribe(1);
    let mut sub_b = updates.subscribe(1);
    let mut sub_other = updates.subscribe(2);

    updates.publish(BalanceUpdate {
        driver_id: 1,
        amount: 1000,
    });

    let expected = BalanceUpdate {
        driver_id: 1,
        amount: 1000,
    };

    // every registration for driver 1 is woken
    assert_eq!(
        timeout(Duration::from_secs(1), sub_a.recv()).await.unwrap(),
        Some(expected)
    );
    assert_eq!(
        timeout(Duration::from_secs(1), sub_b.recv()).await.unwrap(),
        Some(expected)
    );

    // driver 2's registration stays quiet
    assert!(timeout(Duration::from_millis(100), sub_other.recv())
        .await
        .is_err());
}

#[tokio::test]
async fn test_dropped_registry_ends_subscriptions() {
    let updates = BalanceUpdates::new(8);
    let mut sub = updates.subscribe(1);

    drop(updates);

    assert_eq!(sub.recv().await, None);
}

#[tokio::test]
#[serial]
async fn test_credit_publishes_balance_update() {
    let state = create_test_app_state();
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 0);
    }

    let mut subscription = state.balance_updates.subscribe(driver_id);

    let credit_state = state.clone();
    tokio::task::spawn_blocking(move || {
        TransactionService::apply_credit(&credit_state, driver_id, 1000, "pi_notify")
    })
    .await
    .unwrap()
    .unwrap();

    let update = timeout(Duration::from_secs(1), subscription.recv())
        .await
        .unwrap();
    assert_eq!(
        update,
        Some(BalanceUpdate {
            driver_id,
            amount: 1000
        })
    );
}

#[tokio::test]
#[serial]
async fn test_duplicate_delivery_does_not_republish() {
    let state = create_test_app_state();
    let driver_id;
    {
        let mut conn = state.db.get().unwrap();
        cleanup_test_db(&mut conn);
        driver_id = create_test_driver(&mut conn, 0);
    }

    let mut subscription = state.balance_updates.subscribe(driver_id);

    for _ in 0..2 {
        let credit_state = state.clone();
        tokio::task::spawn_blocking(move || {
            TransactionService::apply_credit(&credit_state, driver_id, 1000, "pi_notify_once")
        })
        .await
        .unwrap()
        .unwrap();
    }

    // the replayed delivery was swallowed, so exactly one event arrives
    let first = timeout(Duration::from_secs(1), subscription.recv())
        .await
        .unwrap();
    assert_eq!(
        first,
        Some(BalanceUpdate {
            driver_id,
            amount: 1000
        })
    );
    assert!(timeout(Duration::from_millis(100), subscription.recv())
        .await
        .is_err());
}
