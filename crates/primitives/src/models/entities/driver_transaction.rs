use crate::models::entities::enum_types::TransactionStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;

/// Append-only ledger entry. `payment_intent_id` is the provider's charge
/// reference and is unique across the table; rows are never updated or
/// deleted once written.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::driver_transactions)]
#[diesel(belongs_to(crate::models::entities::driver::Driver))]
pub struct DriverTransaction {
    pub id: i64,
    pub driver_id: i64,
    pub amount: i64,
    pub payment_intent_id: String,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::driver_transactions)]
pub struct NewDriverTransaction<'a> {
    pub driver_id: i64,
    pub amount: i64,
    pub payment_intent_id: &'a str,
    pub status: TransactionStatus,
}
