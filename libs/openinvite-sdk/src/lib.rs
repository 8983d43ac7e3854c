//! Rust client for the Open Invite entitlements API.
//!
//! # Features
//!
//! - **Entitlements fetch** - `GET /api/entitlements` authenticated with the session cookie
//! - **Payload normalization** - every known payload variant is mapped into one
//!   canonical [`Entitlements`] value before it leaves the SDK
//!
//! # Example
//!
//! ```rust,ignore
//! use openinvite_sdk::{OpenInviteClient, OpenInviteConfig, SessionToken};
//!
//! let client = OpenInviteClient::new(OpenInviteConfig {
//!     base_url: "https://api.openinvite.app".parse()?,
//!     session: SessionToken::from_raw("abc123"),
//! })?;
//!
//! let entitlements = client.fetch_entitlements().await?;
//! println!("plan: {}", entitlements.plan);
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
mod normalize;
mod session;

#[cfg(feature = "client")]
pub use client::{OpenInviteClient, OpenInviteConfig};
pub use error::OpenInviteError;
pub use normalize::normalize_entitlements;
pub use session::{SESSION_COOKIE_NAME, SessionToken};

// Re-export shared types for convenience
pub use openinvite_types::{
    Entitlements, ErrorCode, Plan, PlanFeatures, PlanLimits, UsageCounts,
};
