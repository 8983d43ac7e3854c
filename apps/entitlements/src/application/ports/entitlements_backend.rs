use async_trait::async_trait;
use openinvite_types::Entitlements;

use crate::app_error::AppResult;

/// Remote source of truth for the user's plan, limits, features and usage.
#[async_trait]
pub trait EntitlementsBackend: Send + Sync {
    /// Fetch normalized entitlements over the network. Never reads a cache.
    async fn fetch_entitlements(&self) -> AppResult<Entitlements>;
}
