//! Delivery-state lifecycle and change feeds for chat messages.
//!
//! A message's transport/read status moves through `DeliveryState`.
//! The sending side holds a `DeliveryTracker`; views subscribe through
//! the paired `StateFeed` and wake on every published change. Dropping
//! a subscriber is the unsubscribe; there is no listener bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Transport/read lifecycle of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryState {
    /// Accepted locally, not yet acknowledged by the server.
    Pending,
    /// Acknowledged by the server.
    Accepted,
    /// Reached the recipient's client.
    Delivered,
    /// Read by the recipient (read receipt).
    Displayed,
    /// Stored for a recipient that is offline.
    Received,
    /// Gave up; the message never made it.
    Failed,
}

impl DeliveryState {
    /// Terminal states: no further transport/read transitions happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryState::Displayed | DeliveryState::Received)
    }
}

impl std::fmt::Display for DeliveryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeliveryState::Pending => "pending",
            DeliveryState::Accepted => "accepted",
            DeliveryState::Delivered => "delivered",
            DeliveryState::Displayed => "displayed",
            DeliveryState::Received => "received",
            DeliveryState::Failed => "failed",
        };
        f.write_str(s)
    }
}

static NEXT_FEED_ID: AtomicU64 = AtomicU64::new(1);

/// Write half of a delivery-state channel.
#[derive(Debug)]
pub struct DeliveryTracker {
    tx: watch::Sender<DeliveryState>,
}

impl DeliveryTracker {
    /// Create a tracker and its paired feed.
    pub fn new(initial: DeliveryState) -> (Self, StateFeed) {
        let (tx, rx) = watch::channel(initial);
        let feed = StateFeed {
            id: NEXT_FEED_ID.fetch_add(1, Ordering::Relaxed),
            rx,
        };
        (Self { tx }, feed)
    }

    /// Publish a new state, waking all subscribed feeds.
    pub fn set(&self, state: DeliveryState) {
        self.tx.send_replace(state);
    }

    /// Latest published state.
    pub fn current(&self) -> DeliveryState {
        *self.tx.borrow()
    }
}

/// Read half of a delivery-state channel.
///
/// `Clone` and `PartialEq` (by channel identity, not by value) so it
/// can travel in component props.
#[derive(Clone, Debug)]
pub struct StateFeed {
    id: u64,
    rx: watch::Receiver<DeliveryState>,
}

impl StateFeed {
    /// Latest published state.
    pub fn current(&self) -> DeliveryState {
        *self.rx.borrow()
    }

    /// A fresh receiver for a subscription loop (`changed().await`).
    pub fn subscribe(&self) -> watch::Receiver<DeliveryState> {
        self.rx.clone()
    }
}

impl PartialEq for StateFeed {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
