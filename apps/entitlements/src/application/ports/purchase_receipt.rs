use async_trait::async_trait;

use crate::{app_error::AppResult, domain::entities::customer_info::CustomerInfo};

/// Billing provider's view of the customer (store receipts).
#[async_trait]
pub trait PurchaseReceiptSource: Send + Sync {
    /// Current customer info; providers may answer from their own cache.
    async fn customer_info(&self) -> AppResult<CustomerInfo>;

    /// Customer info fetched past any provider-side cache. Called right after
    /// purchases, restores and promo redemptions.
    async fn refresh(&self) -> AppResult<CustomerInfo>;
}
