use async_trait::async_trait;

use crate::{
    app_error::AppResult, application::ports::PurchaseReceiptSource,
    domain::entities::customer_info::CustomerInfo,
};

/// Receipt source used when no billing provider is configured. Always
/// reports a customer with no active entitlements.
pub struct DisabledReceiptSource;

#[async_trait]
impl PurchaseReceiptSource for DisabledReceiptSource {
    async fn customer_info(&self) -> AppResult<CustomerInfo> {
        Ok(CustomerInfo::default())
    }

    async fn refresh(&self) -> AppResult<CustomerInfo> {
        Ok(CustomerInfo::default())
    }
}
