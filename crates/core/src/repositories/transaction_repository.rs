use diesel::prelude::*;
use velosdrop_primitives::error::ApiError;
use velosdrop_primitives::models::{DriverTransaction, NewDriverTransaction, TransactionStatus};
use velosdrop_primitives::schema::driver_transactions;

pub struct TransactionRepository;

impl TransactionRepository {
    /// Idempotency probe: has this payment already been credited?
    pub fn completed_payment_exists(
        conn: &mut PgConnection,
        payment_intent_id: &str,
    ) -> Result<bool, ApiError> {
        driver_transactions::table
            .filter(driver_transactions::payment_intent_id.eq(payment_intent_id))
            .filter(driver_transactions::status.eq(TransactionStatus::Completed))
            .select(diesel::dsl::count_star())
            .first::<i64>(conn)
            .map(|count| count > 0)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_tx: NewDriverTransaction,
    ) -> Result<DriverTransaction, ApiError> {
        diesel::insert_into(driver_transactions::table)
            .values(&new_tx)
            .get_result::<DriverTransaction>(conn)
            .map_err(ApiError::Database)
    }

    pub fn find_recent_by_driver(
        conn: &mut PgConnection,
        driver_id: i64,
        limit: i64,
    ) -> Result<Vec<DriverTransaction>, ApiError> {
        driver_transactions::table
            .filter(driver_transactions::driver_id.eq(driver_id))
            .order(driver_transactions::created_at.desc())
            .limit(limit)
            .load::<DriverTransaction>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}
