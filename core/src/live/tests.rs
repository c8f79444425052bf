//! Tests for the live refresh driver
//!
//! Uses an in-memory store and a scripted gateway so ticks can be driven
//! directly without the background task.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration};
use hashbrown::{HashMap, HashSet};
use tokio::sync::RwLock;

use super::{ChannelId, GatewayError, LiveBoard, MessageId, SurfaceGateway};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::storage::{ObservationRecord, ObservationStore, StorageError};

#[derive(Default)]
struct MemStore {
    records: Mutex<Vec<ObservationRecord>>,
}

impl ObservationStore for MemStore {
    fn append(&self, record: &ObservationRecord) -> Result<(), StorageError> {
        self.records.lock().expect("lock").push(record.clone());
        Ok(())
    }

    fn latest_all(&self) -> Result<HashMap<String, ObservationRecord>, StorageError> {
        let mut latest: HashMap<String, ObservationRecord> = HashMap::new();
        for record in self.records.lock().expect("lock").iter() {
            let newer = latest
                .get(&record.boss)
                .is_none_or(|current| record.observed_at >= current.observed_at);
            if newer {
                latest.insert(record.boss.clone(), record.clone());
            }
        }
        Ok(latest)
    }

    fn latest_one(&self, boss: &str) -> Result<Option<ObservationRecord>, StorageError> {
        Ok(self.latest_all()?.remove(boss))
    }

    fn history(&self, boss: &str, limit: usize) -> Result<Vec<ObservationRecord>, StorageError> {
        let mut records: Vec<ObservationRecord> = self
            .records
            .lock()
            .expect("lock")
            .iter()
            .filter(|r| r.boss == boss)
            .cloned()
            .collect();
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }
}

/// Scripted gateway: records every call, can be told to fail per channel.
#[derive(Default)]
struct MockGateway {
    next_id: AtomicU64,
    updates: Mutex<Vec<(ChannelId, MessageId)>>,
    gone: Mutex<HashSet<ChannelId>>,
    transient: Mutex<HashSet<ChannelId>>,
}

impl MockGateway {
    fn mark_gone(&self, channel: ChannelId) {
        self.gone.lock().expect("lock").insert(channel);
    }

    fn mark_transient(&self, channel: ChannelId) {
        self.transient.lock().expect("lock").insert(channel);
    }

    fn updates_for(&self, channel: ChannelId) -> usize {
        self.updates
            .lock()
            .expect("lock")
            .iter()
            .filter(|(c, _)| *c == channel)
            .count()
    }
}

impl SurfaceGateway for MockGateway {
    async fn publish(&self, _channel: ChannelId, _text: &str) -> Result<MessageId, GatewayError> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn update(
        &self,
        channel: ChannelId,
        message: MessageId,
        _text: &str,
    ) -> Result<(), GatewayError> {
        if self.gone.lock().expect("lock").contains(&channel) {
            return Err(GatewayError::Gone);
        }
        if self.transient.lock().expect("lock").contains(&channel) {
            return Err(GatewayError::Transient {
                reason: "rate limited".to_string(),
            });
        }
        self.updates.lock().expect("lock").push((channel, message));
        Ok(())
    }
}

fn board() -> (LiveBoard<MemStore, MockGateway>, Arc<MemStore>, Arc<MockGateway>) {
    let store = Arc::new(MemStore::default());
    let gateway = Arc::new(MockGateway::default());
    let board = LiveBoard::new(
        Arc::new(Catalog::new()),
        Arc::clone(&store),
        Arc::clone(&gateway),
        Arc::new(RwLock::new(AppConfig::default())),
    );
    (board, store, gateway)
}

fn seed_record(store: &MemStore) {
    let observed_at = DateTime::parse_from_rfc3339("2024-01-01T10:00:00+08:00").expect("timestamp");
    store
        .append(&ObservationRecord {
            boss: "Venatus".to_string(),
            observed_at,
            next_spawn: observed_at + Duration::hours(10),
        })
        .expect("append");
}

#[tokio::test]
async fn subscribing_publishes_and_registers() {
    let (board, store, _) = board();
    seed_record(&store);

    let message = board.subscribe(7).await.expect("subscribe");
    assert!(board.registry().is_subscribed(7).await);
    assert_eq!(board.registry().snapshot().await, vec![(7, message)]);
}

#[tokio::test]
async fn tick_pushes_to_every_subscriber() {
    let (board, _, gateway) = board();
    board.subscribe(1).await.expect("subscribe");
    board.subscribe(2).await.expect("subscribe");

    board.tick().await;
    board.tick().await;

    assert_eq!(gateway.updates_for(1), 2);
    assert_eq!(gateway.updates_for(2), 2);
}

#[tokio::test]
async fn gone_surface_is_dropped_and_skipped_afterwards() {
    let (board, _, gateway) = board();
    board.subscribe(1).await.expect("subscribe");
    board.subscribe(2).await.expect("subscribe");
    gateway.mark_gone(2);

    board.tick().await;
    assert!(!board.registry().is_subscribed(2).await);

    board.tick().await;
    assert_eq!(gateway.updates_for(1), 2);
    assert_eq!(gateway.updates_for(2), 0);
}

#[tokio::test]
async fn transient_failure_keeps_the_subscription() {
    let (board, _, gateway) = board();
    board.subscribe(1).await.expect("subscribe");
    gateway.mark_transient(1);

    board.tick().await;
    assert!(board.registry().is_subscribed(1).await);
    assert_eq!(gateway.updates_for(1), 0);

    // Next tick retries naturally once the surface recovers
    gateway.transient.lock().expect("lock").clear();
    board.tick().await;
    assert_eq!(gateway.updates_for(1), 1);
}

#[tokio::test]
async fn one_failing_surface_never_blocks_the_others() {
    let (board, _, gateway) = board();
    board.subscribe(1).await.expect("subscribe");
    board.subscribe(2).await.expect("subscribe");
    board.subscribe(3).await.expect("subscribe");
    gateway.mark_gone(2);

    board.tick().await;
    assert_eq!(gateway.updates_for(1), 1);
    assert_eq!(gateway.updates_for(3), 1);
}

#[tokio::test]
async fn unsubscribed_surface_receives_no_further_pushes() {
    let (board, _, gateway) = board();
    board.subscribe(1).await.expect("subscribe");
    board.tick().await;

    assert!(board.unsubscribe(1).await);
    board.tick().await;
    assert_eq!(gateway.updates_for(1), 1);
}

#[tokio::test]
async fn unsubscribing_an_unknown_surface_reports_the_no_op() {
    let (board, _, _) = board();
    assert!(!board.unsubscribe(42).await);
}

#[tokio::test]
async fn resubscribing_replaces_the_previous_message() {
    let (board, _, _) = board();
    let first = board.subscribe(1).await.expect("subscribe");
    let second = board.subscribe(1).await.expect("subscribe");
    assert_ne!(first, second);

    let snapshot = board.registry().snapshot().await;
    assert_eq!(snapshot, vec![(1, second)]);
}

#[tokio::test]
async fn empty_registry_ticks_do_nothing() {
    let (board, _, gateway) = board();
    board.tick().await;
    assert!(gateway.updates.lock().expect("lock").is_empty());
}
