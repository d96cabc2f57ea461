use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

pub use velosdrop_primitives::models::BalanceUpdate;

/// Registry for balance-update notifications. The webhook ingestor publishes
/// after a credit commits; views register per driver id and re-read the
/// wallet when woken. Dropping a [`BalanceSubscription`] unregisters it;
/// there is no other teardown step.
#[derive(Clone)]
pub struct BalanceUpdates {
    tx: broadcast::Sender<BalanceUpdate>,
}

impl BalanceUpdates {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Fire-and-forget: a send with no live subscribers is not an error,
    /// the read path remains the source of truth.
    pub fn publish(&self, update: BalanceUpdate) {
        let _ = self.tx.send(update);
    }

    pub fn subscribe(&self, driver_id: i64) -> BalanceSubscription {
        BalanceSubscription {
            driver_id,
            rx: self.tx.subscribe(),
        }
    }
}

/// A live registration for one driver's updates. Messages for other drivers
/// are filtered out here, not at the publisher.
pub struct BalanceSubscription {
    driver_id: i64,
    rx: broadcast::Receiver<BalanceUpdate>,
}

impl BalanceSubscription {
    pub fn driver_id(&self) -> i64 {
        self.driver_id
    }

    /// Next update for this driver, or `None` once the registry is gone.
    /// A lagged receiver skips ahead; missed messages are masked by the
    /// caller's periodic re-read.
    pub async fn recv(&mut self) -> Option<BalanceUpdate> {
        loop {
            match self.rx.recv().await {
                Ok(update) if update.driver_id == self.driver_id => return Some(update),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Stream adapter for SSE plumbing.
    pub fn into_stream(self) -> impl Stream<Item = BalanceUpdate> {
        let driver_id = self.driver_id;
        BroadcastStream::new(self.rx).filter_map(move |res| match res {
            Ok(update) if update.driver_id == driver_id => Some(update),
            _ => None,
        })
    }
}
