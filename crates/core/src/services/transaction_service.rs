use diesel::prelude::*;
use std::collections::HashMap;
use stripe::PaymentIntent;
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::transaction_repository::TransactionRepository;
pub use velosdrop_primitives::{
    error::ApiError,
    models::{BalanceUpdate, NewDriverTransaction, TransactionStatus},
};

/// What became of one `payment_intent.succeeded` delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditOutcome {
    /// Balance incremented and ledger row written.
    Credited,
    /// Same payment reference seen before; nothing written.
    AlreadyProcessed,
    /// Metadata unusable; acknowledged and dropped so the provider stops
    /// redelivering an event that can never become valid.
    Dropped,
}

pub struct TransactionService;

impl TransactionService {
    /// Applies a confirmed payment to the ledger. Delivery is at-least-once,
    /// so everything here must be replay-safe.
    pub fn record_top_up(
        state: &AppState,
        pay_int: &PaymentIntent,
    ) -> Result<CreditOutcome, ApiError> {
        let Some(driver_id) = parse_driver_id(&pay_int.metadata) else {
            warn!(
                "webhook.credit: no valid driver id in metadata for {}, dropping",
                pay_int.id
            );
            return Ok(CreditOutcome::Dropped);
        };

        let amount = pay_int.amount;
        if amount <= 0 {
            warn!(
                "webhook.credit: non-positive amount {} for {}, dropping",
                amount, pay_int.id
            );
            return Ok(CreditOutcome::Dropped);
        }

        Self::apply_credit(state, driver_id, amount, pay_int.id.as_str())
    }

    /// One atomic unit: lock the driver row, check the payment reference,
    /// bump the balance, append the ledger row. Any failure rolls the whole
    /// thing back so a retried delivery starts from a clean slate.
    pub fn apply_credit(
        state: &AppState,
        driver_id: i64,
        amount: i64,
        payment_intent_id: &str,
    ) -> Result<CreditOutcome, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let result = conn.transaction::<_, ApiError, _>(|conn| {
            DriverRepository::find_for_update(conn, driver_id)?
                .ok_or_else(|| ApiError::NotFound(format!("Driver {} not found", driver_id)))?;

            // The row lock above serializes duplicate deliveries for this
            // driver, so the check below cannot race its own twin.
            if TransactionRepository::completed_payment_exists(conn, payment_intent_id)? {
                info!(
                    "webhook.credit: payment {} already processed",
                    payment_intent_id
                );
                return Ok(CreditOutcome::AlreadyProcessed);
            }

            DriverRepository::credit_balance(conn, driver_id, amount)?;

            TransactionRepository::insert(
                conn,
                NewDriverTransaction {
                    driver_id,
                    amount,
                    payment_intent_id,
                    status: TransactionStatus::Completed,
                },
            )?;

            Ok(CreditOutcome::Credited)
        });

        let outcome = match result {
            // Unique index backstop: a duplicate that slipped in anyway means
            // the payment is already recorded, which is a success.
            Err(ApiError::Database(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ))) => {
                info!(
                    "webhook.credit: payment {} raced a duplicate delivery",
                    payment_intent_id
                );
                CreditOutcome::AlreadyProcessed
            }
            other => other?,
        };

        if outcome == CreditOutcome::Credited {
            info!(
                "webhook.credit: driver {} credited {} cents ({})",
                driver_id, amount, payment_intent_id
            );
            state
                .balance_updates
                .publish(BalanceUpdate { driver_id, amount });
        }

        Ok(outcome)
    }
}

/// The issuer writes `driver_id`; older clients sent `driverId`. Anything
/// else is treated as absent.
fn parse_driver_id(metadata: &HashMap<String, String>) -> Option<i64> {
    metadata
        .get("driver_id")
        .or_else(|| metadata.get("driverId"))
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
}
