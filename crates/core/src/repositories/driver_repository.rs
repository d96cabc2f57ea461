use chrono::Utc;
use diesel::prelude::*;
use velosdrop_primitives::error::ApiError;
use velosdrop_primitives::models::Driver;
use velosdrop_primitives::schema::drivers;

pub struct DriverRepository;

impl DriverRepository {
    pub fn find_balance(conn: &mut PgConnection, driver_id: i64) -> Result<Option<i64>, ApiError> {
        drivers::table
            .find(driver_id)
            .select(drivers::balance)
            .first::<i64>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    /// Locks the driver row for the rest of the enclosing transaction.
    /// Concurrent credits for the same driver serialize on this lock.
    pub fn find_for_update(
        conn: &mut PgConnection,
        driver_id: i64,
    ) -> Result<Option<Driver>, ApiError> {
        drivers::table
            .find(driver_id)
            .for_update()
            .first::<Driver>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn credit_balance(
        conn: &mut PgConnection,
        driver_id: i64,
        amount: i64,
    ) -> Result<(), ApiError> {
        diesel::update(drivers::table.find(driver_id))
            .set((
                drivers::balance.eq(drivers::balance + amount),
                drivers::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;
        Ok(())
    }
}
