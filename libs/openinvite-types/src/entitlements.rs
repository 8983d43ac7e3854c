use serde::{Deserialize, Serialize};

use crate::{features::PlanFeatures, limits::PlanLimits, plan::Plan, usage::UsageCounts};

/// Normalized `GET /api/entitlements` response.
///
/// Capability checks only ever see this shape; payload variants are mapped
/// into it by the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Entitlements {
    pub plan: Plan,
    pub limits: PlanLimits,
    pub features: PlanFeatures,
    pub usage: UsageCounts,
}

impl Entitlements {
    /// Restrictive FREE entitlements with zero usage.
    pub fn free() -> Self {
        Self::default()
    }

    /// Default entitlements for `plan`, keeping the given usage counts.
    pub fn for_plan(plan: Plan, usage: UsageCounts) -> Self {
        Self {
            plan,
            limits: PlanLimits::for_plan(plan),
            features: PlanFeatures::for_plan(plan),
            usage,
        }
    }

    pub fn is_pro(&self) -> bool {
        self.plan.is_pro()
    }
}
