use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use std::sync::Arc;

use crate::clients::stripe::StripeClient;
use crate::notifications::BalanceUpdates;
use velosdrop_primitives::config::AppConfig;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Process-wide shared state. Built once at startup and handed to every
/// handler; the pool and the Stripe client are reused for the lifetime of
/// the process.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub stripe: StripeClient,
    pub balance_updates: BalanceUpdates,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Arc<Self> {
        let stripe = StripeClient::new(&config.stripe_details);

        Arc::new(Self {
            db,
            stripe,
            balance_updates: BalanceUpdates::new(64),
            config,
        })
    }
}
