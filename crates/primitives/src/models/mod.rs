pub mod dtos;
pub mod entities;

pub use dtos::health_dto::HealthStatus;
pub use dtos::wallet_dto::{
    BalanceUpdate, TopUpRequest, TopUpResponse, TransactionDto, WalletResponse, WebhookAck,
};
pub use entities::driver::{Driver, NewDriver};
pub use entities::driver_transaction::{DriverTransaction, NewDriverTransaction};
pub use entities::enum_types::TransactionStatus;
