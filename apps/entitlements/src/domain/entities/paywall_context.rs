use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Why an action was denied. The sole vocabulary handed to the paywall sheet;
/// a new denial reason gets a new variant rather than reusing one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PaywallContext {
    ActiveEventsLimit,
    RecurringEvents,
    WhosFreeHorizon,
    UpcomingBirthdaysHorizon,
    CirclesLimit,
    CircleMembersLimit,
    InsightsLocked,
    HistoryLimit,
    AchievementsLocked,
    FriendNotesLimit,
}

/// Copy shown in the paywall sheet for one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaywallCopy {
    pub title: &'static str,
    pub message: &'static str,
}

impl PaywallContext {
    pub fn copy(&self) -> PaywallCopy {
        let (title, message) = match self {
            PaywallContext::ActiveEventsLimit => (
                "Host more events",
                "You've reached the active event limit on the free plan. Upgrade to Pro to host unlimited events.",
            ),
            PaywallContext::RecurringEvents => (
                "Recurring events",
                "Weekly dinners, monthly game nights. Set it once with Pro and your friends get every invite.",
            ),
            PaywallContext::WhosFreeHorizon => (
                "See further ahead",
                "Upgrade to Pro to see who's free further into the future.",
            ),
            PaywallContext::UpcomingBirthdaysHorizon => (
                "Never miss a birthday",
                "Upgrade to Pro to see upcoming birthdays further ahead.",
            ),
            PaywallContext::CirclesLimit => (
                "Create more circles",
                "Free accounts can have a limited number of circles. Upgrade to Pro for unlimited circles.",
            ),
            PaywallContext::CircleMembersLimit => (
                "Grow your circle",
                "This circle is full on the free plan. Upgrade to Pro to add more members.",
            ),
            PaywallContext::InsightsLocked => (
                "Friendship insights",
                "See who you hang out with most and how your circles are doing with Pro.",
            ),
            PaywallContext::HistoryLimit => (
                "Your full history",
                "Upgrade to Pro to look back at every event you've been to.",
            ),
            PaywallContext::AchievementsLocked => (
                "All achievements",
                "Unlock the full set of badges and milestones with Pro.",
            ),
            PaywallContext::FriendNotesLimit => (
                "More friend notes",
                "You've used all your friend notes on the free plan. Upgrade to Pro to keep adding notes.",
            ),
        };

        PaywallCopy { title, message }
    }
}
