//! Test data factories.
//!
//! Each factory starts from a valid FREE-plan fixture; use the closure
//! parameter to override specific fields.

use chrono::{DateTime, TimeZone, Utc};
use openinvite_types::Entitlements;

use crate::domain::entities::snapshot::{EntitlementsSnapshot, SnapshotSource};

/// Create test entitlements starting from the FREE defaults.
pub fn create_test_entitlements(overrides: impl FnOnce(&mut Entitlements)) -> Entitlements {
    let mut entitlements = Entitlements::free();
    overrides(&mut entitlements);
    entitlements
}

/// Create a backend-sourced snapshot stamped at [`test_datetime`].
pub fn create_test_snapshot(
    overrides: impl FnOnce(&mut EntitlementsSnapshot),
) -> EntitlementsSnapshot {
    let mut snapshot = EntitlementsSnapshot {
        entitlements: Entitlements::free(),
        source: SnapshotSource::Backend,
        cached_at: test_datetime(),
    };
    overrides(&mut snapshot);
    snapshot
}

/// Fixed instant used by fixtures and [`super::ManualClock::new`].
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use openinvite_types::{Plan, PlanLimits};

    use super::*;

    #[test]
    fn test_create_test_entitlements_defaults_to_free() {
        let ents = create_test_entitlements(|_| {});
        assert_eq!(ents.plan, Plan::Free);
        assert_eq!(ents.limits, PlanLimits::free());
        assert_eq!(ents.usage.active_events_count, 0);
    }

    #[test]
    fn test_create_test_entitlements_with_overrides() {
        let ents = create_test_entitlements(|e| {
            e.plan = Plan::Pro;
            e.usage.circles_count = 4;
        });
        assert!(ents.is_pro());
        assert_eq!(ents.usage.circles_count, 4);
    }

    #[test]
    fn test_create_test_snapshot_with_overrides() {
        let snapshot = create_test_snapshot(|s| s.source = SnapshotSource::Cache);
        assert_eq!(snapshot.source, SnapshotSource::Cache);
        assert_eq!(snapshot.cached_at, test_datetime());
    }
}
