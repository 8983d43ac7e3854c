use serde::{Deserialize, Serialize};

/// Consumption snapshot reported by the backend at fetch time.
///
/// Never incremented locally; the server is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageCounts {
    pub active_events_count: u32,
    pub circles_count: u32,
    pub friend_notes_count: u32,
}
