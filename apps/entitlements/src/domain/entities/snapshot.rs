use chrono::{DateTime, Duration, Utc};
use openinvite_types::Entitlements;
use serde::{Deserialize, Serialize};

/// Where the current entitlements came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    /// Fresh response from `GET /api/entitlements`.
    Backend,
    /// Read back from the local snapshot cache.
    Cache,
    /// Nothing could be fetched or read; FREE-tier defaults.
    Default,
}

/// Last known entitlements plus provenance. Always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsSnapshot {
    pub entitlements: Entitlements,
    pub source: SnapshotSource,
    pub cached_at: DateTime<Utc>,
}

impl EntitlementsSnapshot {
    pub fn from_backend(entitlements: Entitlements, now: DateTime<Utc>) -> Self {
        Self {
            entitlements,
            source: SnapshotSource::Backend,
            cached_at: now,
        }
    }

    /// FREE-restricted snapshot used when neither backend nor cache answered.
    pub fn free_default(now: DateTime<Utc>) -> Self {
        Self {
            entitlements: Entitlements::free(),
            source: SnapshotSource::Default,
            cached_at: now,
        }
    }

    /// Same data, re-tagged as read from cache.
    pub fn into_cached(self) -> Self {
        Self {
            source: SnapshotSource::Cache,
            ..self
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.cached_at
    }

    /// Fresh while the age has not passed `ttl`. A snapshot stamped in the
    /// future (clock moved backwards) is treated as stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age = self.age(now);
        age >= Duration::zero() && age <= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_767_225_600 + secs, 0).unwrap()
    }

    #[test]
    fn test_freshness_window() {
        let snapshot = EntitlementsSnapshot::from_backend(Entitlements::free(), at(0));
        let ttl = Duration::hours(1);

        assert!(snapshot.is_fresh(at(0), ttl));
        assert!(snapshot.is_fresh(at(3600), ttl));
        assert!(!snapshot.is_fresh(at(3601), ttl));
        assert!(!snapshot.is_fresh(at(-5), ttl));
    }

    #[test]
    fn test_into_cached_keeps_data() {
        let snapshot = EntitlementsSnapshot::from_backend(Entitlements::free(), at(10));
        let cached = snapshot.clone().into_cached();
        assert_eq!(cached.source, SnapshotSource::Cache);
        assert_eq!(cached.entitlements, snapshot.entitlements);
        assert_eq!(cached.cached_at, snapshot.cached_at);
    }

    #[test]
    fn test_source_serde() {
        let json = serde_json::to_string(&SnapshotSource::Backend).unwrap();
        assert_eq!(json, r#""backend""#);
    }
}
