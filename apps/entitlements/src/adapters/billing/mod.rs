pub mod disabled;
pub mod revenuecat;

pub use disabled::DisabledReceiptSource;
pub use revenuecat::RevenueCatReceiptSource;
