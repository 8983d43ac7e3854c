use async_trait::async_trait;

use crate::app_error::AppResult;

/// Durable key/value blob storage on the device.
///
/// `set` replaces the whole value; readers never observe a partial write.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
    async fn remove(&self, key: &str) -> AppResult<()>;
}
