//! Shared entitlements types for the Open Invite client.
//!
//! This crate provides:
//! - The subscription `Plan` enum
//! - Plan limits and feature flags with restrictive defaults
//! - Usage counts reported by the backend
//! - The normalized `Entitlements` shape consumed by capability checks
//! - API error codes

mod entitlements;
mod errors;
mod features;
mod limits;
mod plan;
mod usage;

pub use entitlements::Entitlements;
pub use errors::{ErrorCode, PayloadError};
pub use features::PlanFeatures;
pub use limits::PlanLimits;
pub use plan::Plan;
pub use usage::UsageCounts;
