pub mod entitlements;
pub mod pro_refresh;
