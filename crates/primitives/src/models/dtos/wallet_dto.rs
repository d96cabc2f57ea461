use crate::models::entities::driver_transaction::DriverTransaction;
use crate::models::entities::enum_types::TransactionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Wire field names stay camelCase: that is the contract the web and mobile
// clients already speak.

// --- Top Up DTOs ---

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct TopUpRequest {
    /// Amount in minor units (cents).
    #[validate(range(min = 1, max = 1_000_000))]
    #[schema(example = 1000)]
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopUpResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
    pub amount: i64,
}

// --- Wallet read DTOs ---

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WalletResponse {
    /// Current balance in minor units (cents).
    pub balance: i64,
    /// Most recent ledger entries, newest first.
    pub transactions: Vec<TransactionDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: i64,
    pub amount: i64,
    pub payment_intent_id: String,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<DriverTransaction> for TransactionDto {
    fn from(tx: DriverTransaction) -> Self {
        Self {
            id: tx.id,
            amount: tx.amount,
            payment_intent_id: tx.payment_intent_id,
            status: tx.status,
            created_at: tx.created_at,
        }
    }
}

// --- Webhook / notification DTOs ---

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    pub received: bool,
}

/// Refresh trigger emitted after a credit lands. Carries no authoritative
/// data; consumers re-read the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdate {
    pub driver_id: i64,
    pub amount: i64,
}
