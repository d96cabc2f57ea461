pub mod driver;
pub mod driver_transaction;
pub mod enum_types;
