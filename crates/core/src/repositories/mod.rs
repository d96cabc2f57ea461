pub mod driver_repository;
pub mod transaction_repository;
