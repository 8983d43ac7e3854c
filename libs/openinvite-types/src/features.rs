use serde::{Deserialize, Serialize};

use crate::plan::Plan;

/// Qualitative feature flags. Every absent flag reads as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanFeatures {
    pub recurring_events: bool,
    pub circle_insights: bool,
    pub top_friends_analytics: bool,
    pub full_achievements: bool,
    pub priority_sync: bool,
    pub early_access: bool,
}

impl PlanFeatures {
    pub const fn free() -> Self {
        Self {
            recurring_events: false,
            circle_insights: false,
            top_friends_analytics: false,
            full_achievements: false,
            priority_sync: false,
            early_access: false,
        }
    }

    pub const fn pro() -> Self {
        Self {
            recurring_events: true,
            circle_insights: true,
            top_friends_analytics: true,
            full_achievements: true,
            priority_sync: true,
            early_access: true,
        }
    }

    pub fn for_plan(plan: Plan) -> Self {
        if plan.is_pro() { Self::pro() } else { Self::free() }
    }
}
