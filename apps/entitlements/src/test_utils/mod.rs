//! Test utilities.
//!
//! This module provides:
//! - Test data factories for entitlements and snapshots
//! - In-memory store and manual clock for the snapshot cache
//! - Stub backend and receipt sources with scriptable responses

mod factories;
mod source_mocks;
mod store_mocks;

pub use factories::*;
pub use source_mocks::*;
pub use store_mocks::*;
