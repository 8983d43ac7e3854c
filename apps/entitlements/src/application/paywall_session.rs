use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Who asked for the paywall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaywallTrigger {
    /// The app decided to prompt on its own (e.g. after hitting a limit).
    Automatic,
    /// The user tapped an explicit upgrade button.
    Manual,
}

/// Tracks whether an automatic paywall has been shown in this app session.
///
/// Lives for the app session only and is never persisted. One instance is
/// shared through the app state; tests create their own.
///
/// State machine: `unshown -> shown`, back to `unshown` only through
/// [`PaywallSession::reset_session_tracking`] (foreground or sign-out).
#[derive(Debug, Default)]
pub struct PaywallSession {
    shown: AtomicBool,
}

impl PaywallSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_shown_this_session(&self) -> bool {
        self.shown.load(Ordering::SeqCst)
    }

    pub fn mark_shown(&self) {
        self.shown.store(true, Ordering::SeqCst);
    }

    pub fn can_show_automatic(&self) -> bool {
        !self.was_shown_this_session()
    }

    pub fn reset_session_tracking(&self) {
        debug!("paywall session tracking reset");
        self.shown.store(false, Ordering::SeqCst);
    }

    /// Decide whether to present now. Manual requests always pass; an
    /// automatic request passes once per session and marks it shown.
    pub fn should_present(&self, trigger: PaywallTrigger) -> bool {
        match trigger {
            PaywallTrigger::Manual => true,
            PaywallTrigger::Automatic => self
                .shown
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok(),
        }
    }
}
