use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of the billing entitlement that unlocks Pro.
pub const DEFAULT_PREMIUM_ENTITLEMENT: &str = "premium";

/// Purchase-receipt view of a customer: the billing entitlements that are
/// currently active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub active_entitlements: BTreeSet<String>,
}

impl CustomerInfo {
    pub fn with_active<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_entitlements: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_active(&self, entitlement_id: &str) -> bool {
        self.active_entitlements.contains(entitlement_id)
    }
}
