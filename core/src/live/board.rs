//! Periodic re-render and push driver

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::time::{Duration, MissedTickBehavior, interval};

use super::{ChannelId, GatewayError, LiveError, LiveRegistry, MessageId, SurfaceGateway};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::storage::{ObservationStore, StorageError};
use crate::view;

/// Drives all live countdown surfaces from one background task.
pub struct LiveBoard<S, G> {
    catalog: Arc<Catalog>,
    store: Arc<S>,
    gateway: Arc<G>,
    config: Arc<RwLock<AppConfig>>,
    registry: LiveRegistry,
}

// Manual impl: `S`/`G` live behind Arcs, no bounds needed to clone.
impl<S, G> Clone for LiveBoard<S, G> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            store: Arc::clone(&self.store),
            gateway: Arc::clone(&self.gateway),
            config: Arc::clone(&self.config),
            registry: self.registry.clone(),
        }
    }
}

impl<S, G> LiveBoard<S, G>
where
    S: ObservationStore + 'static,
    G: SurfaceGateway,
{
    pub fn new(
        catalog: Arc<Catalog>,
        store: Arc<S>,
        gateway: Arc<G>,
        config: Arc<RwLock<AppConfig>>,
    ) -> Self {
        Self {
            catalog,
            store,
            gateway,
            config,
            registry: LiveRegistry::new(),
        }
    }

    pub fn registry(&self) -> &LiveRegistry {
        &self.registry
    }

    /// Register a surface: publish the current table once and remember the
    /// message for subsequent ticks. Re-subscribing a surface replaces its
    /// previous subscription.
    pub async fn subscribe(&self, channel: ChannelId) -> Result<MessageId, LiveError> {
        let text = self.render_now().await?;
        let message = self.gateway.publish(channel, &text).await?;
        if self.registry.insert(channel, message).await.is_some() {
            tracing::debug!(channel, "live subscription replaced");
        }
        Ok(message)
    }

    /// Drop a surface's subscription. Returns `false` when it was not
    /// subscribed, so callers can report the no-op distinctly.
    pub async fn unsubscribe(&self, channel: ChannelId) -> bool {
        self.registry.remove(channel).await
    }

    /// Run the refresh loop until the task is aborted.
    pub async fn run(self) {
        let period = {
            let config = self.config.read().await;
            Duration::from_secs(config.refresh_secs.max(1))
        };
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(period_secs = period.as_secs(), "live refresh loop started");

        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    /// One refresh pass over a snapshot of the current subscribers.
    ///
    /// Failures are isolated per surface: a gone target drops that
    /// subscription, any other failure is logged and retried next tick.
    pub async fn tick(&self) {
        let subscribers = self.registry.snapshot().await;
        if subscribers.is_empty() {
            return;
        }

        let text = match self.render_now().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "skipping live refresh tick");
                return;
            }
        };

        for (channel, message) in subscribers {
            match self.gateway.update(channel, message, &text).await {
                Ok(()) => {}
                Err(GatewayError::Gone) => {
                    self.registry.remove(channel).await;
                    tracing::info!(channel, "live surface gone, subscription dropped");
                }
                Err(e) => {
                    tracing::warn!(channel, error = %e, "live update failed, retrying next tick");
                }
            }
        }
    }

    async fn render_now(&self) -> Result<String, StorageError> {
        let latest = self.store.latest_all()?;
        let offset = self.config.read().await.display_offset();
        let now = Utc::now().with_timezone(&offset);
        Ok(view::render_table(&self.catalog, &latest, now))
    }
}
