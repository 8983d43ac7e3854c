//! Capability checks: pure functions from entitlements and action parameters
//! to an allow/deny decision.
//!
//! A `None` limit is unlimited, never zero. Count limits deny *at* the limit:
//! a user holding exactly `max` items cannot create one more.

use openinvite_types::Entitlements;
use serde::Serialize;

use crate::domain::entities::{gate::GateDecision, paywall_context::PaywallContext};

fn limit_reached(limit: Option<u32>, count: u32) -> bool {
    limit.is_some_and(|max| count >= max)
}

fn horizon_exceeded(limit: Option<u32>, requested_days: u32) -> Option<u32> {
    limit.filter(|max| requested_days > *max)
}

pub fn can_create_event(ents: &Entitlements, is_recurring: bool) -> GateDecision {
    if is_recurring && !ents.features.recurring_events {
        return GateDecision::deny(PaywallContext::RecurringEvents);
    }
    if limit_reached(ents.limits.active_events_max, ents.usage.active_events_count) {
        return GateDecision::deny(PaywallContext::ActiveEventsLimit);
    }
    GateDecision::Allowed
}

pub fn can_view_whos_free(ents: &Entitlements, requested_days: u32) -> GateDecision {
    match horizon_exceeded(ents.limits.whos_free_horizon_days, requested_days) {
        Some(limit) => GateDecision::deny_with_limit(PaywallContext::WhosFreeHorizon, limit),
        None => GateDecision::Allowed,
    }
}

pub fn can_view_birthdays(ents: &Entitlements, requested_days: u32) -> GateDecision {
    match horizon_exceeded(ents.limits.upcoming_birthdays_horizon_days, requested_days) {
        Some(limit) => {
            GateDecision::deny_with_limit(PaywallContext::UpcomingBirthdaysHorizon, limit)
        }
        None => GateDecision::Allowed,
    }
}

pub fn can_create_circle(ents: &Entitlements) -> GateDecision {
    if limit_reached(ents.limits.circles_max, ents.usage.circles_count) {
        return GateDecision::deny(PaywallContext::CirclesLimit);
    }
    GateDecision::Allowed
}

pub fn can_add_circle_member(ents: &Entitlements, current_members: u32) -> GateDecision {
    if limit_reached(ents.limits.members_per_circle_max, current_members) {
        return GateDecision::deny(PaywallContext::CircleMembersLimit);
    }
    GateDecision::Allowed
}

pub fn can_use_insights(ents: &Entitlements) -> GateDecision {
    if !ents.features.top_friends_analytics {
        return GateDecision::deny(PaywallContext::InsightsLocked);
    }
    GateDecision::Allowed
}

pub fn can_view_full_history(ents: &Entitlements, requested_days: u32) -> GateDecision {
    if horizon_exceeded(ents.limits.event_history_days, requested_days).is_some() {
        return GateDecision::deny(PaywallContext::HistoryLimit);
    }
    GateDecision::Allowed
}

pub fn can_view_full_achievements(ents: &Entitlements) -> GateDecision {
    if !ents.features.full_achievements {
        return GateDecision::deny(PaywallContext::AchievementsLocked);
    }
    GateDecision::Allowed
}

pub fn can_add_friend_note(ents: &Entitlements) -> GateDecision {
    if limit_reached(ents.limits.friend_notes_max, ents.usage.friend_notes_count) {
        return GateDecision::deny(PaywallContext::FriendNotesLimit);
    }
    GateDecision::Allowed
}

/// A gated action together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "capability", rename_all = "snake_case")]
pub enum Capability {
    CreateEvent { is_recurring: bool },
    ViewWhosFree { requested_days: u32 },
    ViewBirthdays { requested_days: u32 },
    CreateCircle,
    AddCircleMember { current_members: u32 },
    UseInsights,
    ViewFullHistory { requested_days: u32 },
    ViewFullAchievements,
    AddFriendNote,
}

impl Capability {
    pub fn check(&self, ents: &Entitlements) -> GateDecision {
        match *self {
            Capability::CreateEvent { is_recurring } => can_create_event(ents, is_recurring),
            Capability::ViewWhosFree { requested_days } => can_view_whos_free(ents, requested_days),
            Capability::ViewBirthdays { requested_days } => {
                can_view_birthdays(ents, requested_days)
            }
            Capability::CreateCircle => can_create_circle(ents),
            Capability::AddCircleMember { current_members } => {
                can_add_circle_member(ents, current_members)
            }
            Capability::UseInsights => can_use_insights(ents),
            Capability::ViewFullHistory { requested_days } => {
                can_view_full_history(ents, requested_days)
            }
            Capability::ViewFullAchievements => can_view_full_achievements(ents),
            Capability::AddFriendNote => can_add_friend_note(ents),
        }
    }
}
