pub mod customer_info;
pub mod gate;
pub mod paywall_context;
pub mod pro_status;
pub mod snapshot;
