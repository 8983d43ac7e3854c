pub mod app_error;
pub mod capabilities;
pub mod paywall_session;
pub mod ports;
pub mod snapshot_cache;
pub mod use_cases;
