pub mod payment_service;
pub mod stripe_service;
pub mod transaction_service;
pub mod wallet_service;
