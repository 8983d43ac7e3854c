pub mod app;
pub mod clock;
pub mod config;
pub mod http_client;
pub mod setup;
