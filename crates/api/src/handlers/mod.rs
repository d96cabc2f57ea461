pub mod health;
pub mod stripe_webhook;
pub mod top_up;
pub mod wallet;
pub mod wallet_updates;
