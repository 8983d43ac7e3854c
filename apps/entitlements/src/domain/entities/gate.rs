use serde::Serialize;

use super::paywall_context::PaywallContext;

/// Result of a capability check.
///
/// Serializes as `{"allowed": true}` or
/// `{"allowed": false, "context": "...", "limit": n}` (`limit` only when set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "GateDecisionWire")]
pub enum GateDecision {
    Allowed,
    Denied {
        context: PaywallContext,
        limit: Option<u32>,
    },
}

impl GateDecision {
    pub fn deny(context: PaywallContext) -> Self {
        Self::Denied {
            context,
            limit: None,
        }
    }

    pub fn deny_with_limit(context: PaywallContext, limit: u32) -> Self {
        Self::Denied {
            context,
            limit: Some(limit),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn context(&self) -> Option<PaywallContext> {
        match self {
            Self::Allowed => None,
            Self::Denied { context, .. } => Some(*context),
        }
    }

    pub fn limit(&self) -> Option<u32> {
        match self {
            Self::Allowed => None,
            Self::Denied { limit, .. } => *limit,
        }
    }
}

#[derive(Serialize)]
struct GateDecisionWire {
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<PaywallContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl From<GateDecision> for GateDecisionWire {
    fn from(decision: GateDecision) -> Self {
        Self {
            allowed: decision.is_allowed(),
            context: decision.context(),
            limit: decision.limit(),
        }
    }
}

/// Outcome of gating an action while signals may still be loading.
///
/// `Pending` must never be rendered as a paywall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GateOutcome {
    Pending,
    Decided { decision: GateDecision },
}

impl GateOutcome {
    /// The paywall to present, if any. Always `None` while pending.
    pub fn paywall(&self) -> Option<PaywallContext> {
        match self {
            GateOutcome::Pending => None,
            GateOutcome::Decided { decision } => decision.context(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GateOutcome::Pending)
    }
}
