//! Boundaries of the entitlements subsystem. Adapters implement these;
//! use cases only see the traits.

pub mod clock;
pub mod entitlements_backend;
pub mod purchase_receipt;
pub mod snapshot_store;

pub use clock::Clock;
pub use entitlements_backend::EntitlementsBackend;
pub use purchase_receipt::PurchaseReceiptSource;
pub use snapshot_store::SnapshotStore;
