//! Command-line interface.
//!
//! ## Commands
//!
//! - `status` - Resolve entitlements and print the snapshot and pro status
//! - `refresh` - Refresh both pro signals after a purchase, restore or promo
//! - `check` - Gate one capability against the current entitlements
//! - `paywall` - Print the paywall copy for a context
//! - `sign-out` - Forget cached entitlements

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    app_error::{AppError, AppResult},
    application::{capabilities::Capability, paywall_session::PaywallTrigger},
    domain::entities::{
        gate::GateOutcome,
        paywall_context::{PaywallContext, PaywallCopy},
        pro_status::RefreshReason,
    },
    infra::app::AppState,
};

// =============================================================================
// Main CLI
// =============================================================================

/// Open Invite entitlements and paywall gating
#[derive(Parser, Debug)]
#[command(name = "openinvite-entitlements")]
#[command(about = "Open Invite entitlements and paywall gating", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve entitlements and print the snapshot with the pro status
    Status,

    /// Refresh both pro signals, bypassing caches
    Refresh {
        /// purchase, restore, promo_redeem or manual
        reason: RefreshReason,
    },

    /// Check whether an action is allowed
    Check {
        capability: CliCapability,

        /// Requested horizon for who's-free, birthdays and history
        #[arg(long)]
        days: Option<u32>,

        /// Current member count, for add-circle-member
        #[arg(long)]
        members: Option<u32>,

        /// The event repeats, for create-event
        #[arg(long)]
        recurring: bool,
    },

    /// Print the paywall copy for a context tag (e.g. CIRCLES_LIMIT)
    Paywall { context: PaywallContext },

    /// Clear cached entitlements for the signed-in user
    SignOut,
}

/// Capability names accepted by `check`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliCapability {
    CreateEvent,
    ViewWhosFree,
    ViewBirthdays,
    CreateCircle,
    AddCircleMember,
    UseInsights,
    ViewFullHistory,
    ViewFullAchievements,
    AddFriendNote,
}

impl CliCapability {
    pub fn into_capability(
        self,
        days: Option<u32>,
        members: Option<u32>,
        recurring: bool,
    ) -> AppResult<Capability> {
        let requested_days = || {
            days.ok_or_else(|| AppError::InvalidInput("--days is required for this capability".into()))
        };

        Ok(match self {
            CliCapability::CreateEvent => Capability::CreateEvent {
                is_recurring: recurring,
            },
            CliCapability::ViewWhosFree => Capability::ViewWhosFree {
                requested_days: requested_days()?,
            },
            CliCapability::ViewBirthdays => Capability::ViewBirthdays {
                requested_days: requested_days()?,
            },
            CliCapability::CreateCircle => Capability::CreateCircle,
            CliCapability::AddCircleMember => Capability::AddCircleMember {
                current_members: members.ok_or_else(|| {
                    AppError::InvalidInput("--members is required for add-circle-member".into())
                })?,
            },
            CliCapability::UseInsights => Capability::UseInsights,
            CliCapability::ViewFullHistory => Capability::ViewFullHistory {
                requested_days: requested_days()?,
            },
            CliCapability::ViewFullAchievements => Capability::ViewFullAchievements,
            CliCapability::AddFriendNote => Capability::AddFriendNote,
        })
    }
}

// =============================================================================
// Output
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PaywallView {
    pub context: PaywallContext,
    #[serde(flatten)]
    pub copy: PaywallCopy,
}

impl From<PaywallContext> for PaywallView {
    fn from(context: PaywallContext) -> Self {
        Self {
            context,
            copy: context.copy(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckView {
    pub capability: Capability,
    pub outcome: GateOutcome,
    /// Paywall to present; only set the first time a deny happens in a session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paywall: Option<PaywallView>,
}

/// Output for commands that need no backend.
pub fn run_offline(command: &Commands) -> Option<Value> {
    match command {
        Commands::Paywall { context } => Some(json!(PaywallView::from(*context))),
        _ => None,
    }
}

pub async fn run(state: &AppState, command: Commands) -> AppResult<Value> {
    match command {
        Commands::Status => {
            state.entitlements.cold_start().await;
            let status = state.entitlements.load().await;
            Ok(json!({
                "snapshot": state.entitlements.current_snapshot(),
                "proStatus": status,
            }))
        }
        Commands::Refresh { reason } => {
            let result = state.refresh.refresh_pro_status(reason).await;
            Ok(json!(result))
        }
        Commands::Check {
            capability,
            days,
            members,
            recurring,
        } => {
            let capability = capability.into_capability(days, members, recurring)?;
            state.entitlements.load().await;
            Ok(json!(check(state, capability)))
        }
        Commands::Paywall { context } => Ok(json!(PaywallView::from(context))),
        Commands::SignOut => {
            state.entitlements.sign_out().await;
            state.paywall.reset_session_tracking();
            Ok(json!({ "signedOut": true }))
        }
    }
}

fn check(state: &AppState, capability: Capability) -> CheckView {
    let outcome = state.entitlements.gate(capability);
    let paywall = outcome
        .paywall()
        .filter(|_| state.paywall.should_present(PaywallTrigger::Automatic))
        .map(PaywallView::from);

    CheckView {
        capability,
        outcome,
        paywall,
    }
}
