pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infra;

#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
pub use domain::*;
