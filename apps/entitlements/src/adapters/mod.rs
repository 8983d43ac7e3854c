pub mod backend;
pub mod billing;
pub mod persistence;
