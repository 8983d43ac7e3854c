use serde::{Deserialize, Serialize};

use crate::plan::Plan;

/// Numeric ceilings for a plan. `None` means unlimited.
///
/// Deserialization distinguishes an absent key from an explicit `null`:
/// an absent key falls back to the FREE ceiling, `null` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanLimits {
    pub active_events_max: Option<u32>,
    pub event_history_days: Option<u32>,
    pub circles_max: Option<u32>,
    pub members_per_circle_max: Option<u32>,
    pub friend_notes_max: Option<u32>,
    pub whos_free_horizon_days: Option<u32>,
    pub upcoming_birthdays_horizon_days: Option<u32>,
}

impl PlanLimits {
    pub const FREE_ACTIVE_EVENTS_MAX: u32 = 3;
    pub const FREE_EVENT_HISTORY_DAYS: u32 = 30;
    pub const FREE_CIRCLES_MAX: u32 = 2;
    pub const FREE_MEMBERS_PER_CIRCLE_MAX: u32 = 15;
    pub const FREE_FRIEND_NOTES_MAX: u32 = 5;
    pub const FREE_WHOS_FREE_HORIZON_DAYS: u32 = 7;
    pub const FREE_UPCOMING_BIRTHDAYS_HORIZON_DAYS: u32 = 7;

    pub const PRO_WHOS_FREE_HORIZON_DAYS: u32 = 90;
    pub const PRO_UPCOMING_BIRTHDAYS_HORIZON_DAYS: u32 = 90;

    /// Hardcoded FREE ceilings, used whenever the backend omits a value.
    pub const fn free() -> Self {
        Self {
            active_events_max: Some(Self::FREE_ACTIVE_EVENTS_MAX),
            event_history_days: Some(Self::FREE_EVENT_HISTORY_DAYS),
            circles_max: Some(Self::FREE_CIRCLES_MAX),
            members_per_circle_max: Some(Self::FREE_MEMBERS_PER_CIRCLE_MAX),
            friend_notes_max: Some(Self::FREE_FRIEND_NOTES_MAX),
            whos_free_horizon_days: Some(Self::FREE_WHOS_FREE_HORIZON_DAYS),
            upcoming_birthdays_horizon_days: Some(Self::FREE_UPCOMING_BIRTHDAYS_HORIZON_DAYS),
        }
    }

    pub const fn pro() -> Self {
        Self {
            active_events_max: None,
            event_history_days: None,
            circles_max: None,
            members_per_circle_max: None,
            friend_notes_max: None,
            whos_free_horizon_days: Some(Self::PRO_WHOS_FREE_HORIZON_DAYS),
            upcoming_birthdays_horizon_days: Some(Self::PRO_UPCOMING_BIRTHDAYS_HORIZON_DAYS),
        }
    }

    pub fn for_plan(plan: Plan) -> Self {
        if plan.is_pro() { Self::pro() } else { Self::free() }
    }

    /// True when every ceiling in `self` is at least as generous as in `other`.
    pub fn covers(&self, other: &PlanLimits) -> bool {
        fn ge(a: Option<u32>, b: Option<u32>) -> bool {
            match (a, b) {
                (None, _) => true,
                (Some(_), None) => false,
                (Some(a), Some(b)) => a >= b,
            }
        }

        ge(self.active_events_max, other.active_events_max)
            && ge(self.event_history_days, other.event_history_days)
            && ge(self.circles_max, other.circles_max)
            && ge(self.members_per_circle_max, other.members_per_circle_max)
            && ge(self.friend_notes_max, other.friend_notes_max)
            && ge(self.whos_free_horizon_days, other.whos_free_horizon_days)
            && ge(
                self.upcoming_birthdays_horizon_days,
                other.upcoming_birthdays_horizon_days,
            )
    }
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self::free()
    }
}
