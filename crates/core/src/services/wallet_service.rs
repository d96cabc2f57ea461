use tracing::error;

use crate::app_state::AppState;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::transaction_repository::TransactionRepository;
pub use velosdrop_primitives::{
    error::ApiError,
    models::{TransactionDto, WalletResponse},
};

const RECENT_TX_LIMIT: i64 = 5;

pub struct WalletService;

impl WalletService {
    /// Snapshot of the driver's wallet: balance plus the most recent ledger
    /// entries, newest first. Read-only; this is the source of truth that
    /// every refresh trigger points back at.
    pub fn wallet_snapshot(state: &AppState, driver_id: i64) -> Result<WalletResponse, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("wallet.read: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let balance = DriverRepository::find_balance(&mut conn, driver_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Driver {} not found", driver_id)))?;

        let transactions =
            TransactionRepository::find_recent_by_driver(&mut conn, driver_id, RECENT_TX_LIMIT)?;

        Ok(WalletResponse {
            balance,
            transactions: transactions.into_iter().map(TransactionDto::from).collect(),
        })
    }
}
