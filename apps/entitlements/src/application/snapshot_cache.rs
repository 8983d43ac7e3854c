use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, warn};

use crate::{
    application::ports::{Clock, SnapshotStore},
    domain::entities::snapshot::EntitlementsSnapshot,
};

/// Storage key of the serialized snapshot.
pub const SNAPSHOT_KEY: &str = "openinvite.entitlements.snapshot.v1";

/// Default freshness window, in seconds.
pub const DEFAULT_SNAPSHOT_TTL_SECS: i64 = 3600;

/// Last known entitlements persisted on the device.
///
/// An optimization, not a source of truth: reads never fail (errors read as
/// "absent") and writes are best-effort.
#[derive(Clone)]
pub struct SnapshotCache {
    store: Arc<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl SnapshotCache {
    pub fn new(store: Arc<dyn SnapshotStore>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    /// Cached snapshot if it is still within the TTL, tagged as cache.
    pub async fn load(&self) -> Option<EntitlementsSnapshot> {
        let snapshot = self.load_stale().await?;
        if snapshot.is_fresh(self.clock.now(), self.ttl) {
            Some(snapshot)
        } else {
            debug!(cached_at = %snapshot.cached_at, "cached entitlements expired");
            None
        }
    }

    /// Cached snapshot regardless of age. Only for last-resort fallback.
    pub async fn load_stale(&self) -> Option<EntitlementsSnapshot> {
        let raw = match self.store.get(SNAPSHOT_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "reading cached entitlements failed");
                return None;
            }
        };

        match serde_json::from_str::<EntitlementsSnapshot>(&raw) {
            Ok(snapshot) => Some(snapshot.into_cached()),
            Err(err) => {
                warn!(error = %err, "cached entitlements unreadable; ignoring");
                None
            }
        }
    }

    /// Persist a backend snapshot, replacing whatever was cached before.
    pub async fn save(&self, snapshot: &EntitlementsSnapshot) {
        let raw = match serde_json::to_string(snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "serializing entitlements snapshot failed");
                return;
            }
        };

        if let Err(err) = self.store.set(SNAPSHOT_KEY, &raw).await {
            warn!(error = %err, "caching entitlements failed");
        }
    }

    /// Drop the cached snapshot (sign-out).
    pub async fn clear(&self) {
        if let Err(err) = self.store.remove(SNAPSHOT_KEY).await {
            warn!(error = %err, "clearing cached entitlements failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use openinvite_types::Plan;

    use super::*;
    use crate::{
        domain::entities::snapshot::SnapshotSource,
        test_utils::{
            InMemorySnapshotStore, ManualClock, create_test_entitlements, create_test_snapshot,
        },
    };

    fn snapshot_of(entitlements: openinvite_types::Entitlements) -> EntitlementsSnapshot {
        create_test_snapshot(|s| s.entitlements = entitlements)
    }

    fn cache_with(store: Arc<InMemorySnapshotStore>, clock: Arc<ManualClock>) -> SnapshotCache {
        SnapshotCache::new(store, clock, Duration::seconds(DEFAULT_SNAPSHOT_TTL_SECS))
    }

    #[tokio::test]
    async fn test_round_trip_within_ttl() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(store, clock.clone());
        let ents = create_test_entitlements(|e| e.plan = Plan::Pro);

        cache.save(&snapshot_of(ents.clone())).await;
        clock.advance(Duration::minutes(59));

        let loaded = cache.load().await.expect("fresh snapshot");
        assert_eq!(loaded.entitlements, ents);
        assert_eq!(loaded.source, SnapshotSource::Cache);
    }

    #[tokio::test]
    async fn test_expired_snapshot_reads_as_absent() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(store, clock.clone());

        cache.save(&create_test_snapshot(|_| {})).await;
        clock.advance(Duration::hours(1) + Duration::seconds(1));

        assert!(cache.load().await.is_none());
        let stale = cache.load_stale().await.expect("stale snapshot kept");
        assert_eq!(stale.source, SnapshotSource::Cache);
    }

    #[tokio::test]
    async fn test_missing_snapshot() {
        let cache = cache_with(
            Arc::new(InMemorySnapshotStore::new()),
            Arc::new(ManualClock::new()),
        );
        assert!(cache.load().await.is_none());
        assert!(cache.load_stale().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_blob_reads_as_absent() {
        let store = Arc::new(InMemorySnapshotStore::new());
        store.insert_raw(SNAPSHOT_KEY, "{not json");
        let cache = cache_with(store, Arc::new(ManualClock::new()));

        assert!(cache.load_stale().await.is_none());
    }

    #[tokio::test]
    async fn test_read_failure_reads_as_absent() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(store.clone(), clock);
        cache.save(&create_test_snapshot(|_| {})).await;

        store.fail_reads(true);
        assert!(cache.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_failure_is_swallowed() {
        let store = Arc::new(InMemorySnapshotStore::new());
        store.fail_writes(true);
        let cache = cache_with(store, Arc::new(ManualClock::new()));

        cache.save(&create_test_snapshot(|_| {})).await;
        assert!(cache.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_wholesale() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(store, clock.clone());

        cache
            .save(&snapshot_of(create_test_entitlements(|e| e.usage.circles_count = 1)))
            .await;
        clock.advance(Duration::minutes(5));
        let newer = create_test_entitlements(|e| e.plan = Plan::Pro);
        cache
            .save(&create_test_snapshot(|s| {
                s.entitlements = newer.clone();
                s.cached_at = clock.now();
            }))
            .await;

        let loaded = cache.load().await.unwrap();
        assert_eq!(loaded.entitlements, newer);
        assert_eq!(loaded.cached_at, clock.now());
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = cache_with(
            Arc::new(InMemorySnapshotStore::new()),
            Arc::new(ManualClock::new()),
        );
        cache.save(&create_test_snapshot(|_| {})).await;
        cache.clear().await;
        assert!(cache.load_stale().await.is_none());
    }
}
