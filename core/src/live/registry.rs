//! Subscription registry

use std::sync::Arc;

use hashbrown::HashMap;
use tokio::sync::RwLock;

use super::{ChannelId, MessageId};

/// Active live subscriptions, keyed by surface.
///
/// At most one subscription per surface; inserting again replaces the old
/// message id. The refresh loop iterates a snapshot, so registrations and
/// removals during a tick never corrupt it; a removal is effective no
/// later than the next tick.
#[derive(Debug, Clone, Default)]
pub struct LiveRegistry {
    inner: Arc<RwLock<HashMap<ChannelId, MessageId>>>,
}

impl LiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscription, returning the replaced message id if the
    /// surface was already subscribed.
    pub async fn insert(&self, channel: ChannelId, message: MessageId) -> Option<MessageId> {
        self.inner.write().await.insert(channel, message)
    }

    /// Remove a subscription. Returns `false` if the surface was not
    /// subscribed.
    pub async fn remove(&self, channel: ChannelId) -> bool {
        self.inner.write().await.remove(&channel).is_some()
    }

    pub async fn is_subscribed(&self, channel: ChannelId) -> bool {
        self.inner.read().await.contains_key(&channel)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Current subscriptions as an owned snapshot for one tick.
    pub async fn snapshot(&self) -> Vec<(ChannelId, MessageId)> {
        self.inner
            .read()
            .await
            .iter()
            .map(|(&c, &m)| (c, m))
            .collect()
    }
}
