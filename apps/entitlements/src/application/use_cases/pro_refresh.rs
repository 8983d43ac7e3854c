use tracing::{info, instrument, warn};

use crate::{
    application::use_cases::entitlements::EntitlementsUseCases,
    domain::entities::pro_status::{ProRefreshResult, RefreshReason},
};

/// Post-transaction refresh of both pro signals.
#[derive(Clone)]
pub struct ProRefreshUseCases {
    entitlements: EntitlementsUseCases,
}

impl ProRefreshUseCases {
    pub fn new(entitlements: EntitlementsUseCases) -> Self {
        Self { entitlements }
    }

    /// Refresh the purchase receipt and the backend entitlements concurrently,
    /// each bypassing its cache.
    ///
    /// Never fails: a source that cannot be reached counts as not pro, and the
    /// combined flag is true if either source says pro. Callers must gate on
    /// `combined_is_pro`, since the backend can lag a purchase.
    #[instrument(skip(self), fields(reason = %reason))]
    pub async fn refresh_pro_status(&self, reason: RefreshReason) -> ProRefreshResult {
        let (receipt, backend) = tokio::join!(
            self.entitlements.refresh_receipt(),
            self.entitlements.refresh_backend(),
        );

        let purchase_receipt_is_pro = receipt.unwrap_or_else(|err| {
            warn!(error = %err, "purchase receipt refresh failed");
            false
        });
        let backend_is_pro = backend.unwrap_or_else(|err| {
            warn!(error = %err, "backend entitlements refresh failed");
            false
        });

        let result = ProRefreshResult::new(purchase_receipt_is_pro, backend_is_pro);
        info!(
            purchase_receipt_is_pro = result.purchase_receipt_is_pro,
            backend_is_pro = result.backend_is_pro,
            combined_is_pro = result.combined_is_pro,
            "pro status refreshed"
        );
        result
    }
}
