use openinvite_types::Entitlements;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

/// Pro signal exposed to screens. Screens must not gate while `is_loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProStatus {
    pub is_pro: bool,
    pub is_loading: bool,
}

/// Event that triggered a pro-status refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RefreshReason {
    Purchase,
    Restore,
    PromoRedeem,
    Manual,
}

/// Result of a pro-status refresh: each source's view and their OR-merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProRefreshResult {
    pub purchase_receipt_is_pro: bool,
    pub backend_is_pro: bool,
    pub combined_is_pro: bool,
}

impl ProRefreshResult {
    pub fn new(purchase_receipt_is_pro: bool, backend_is_pro: bool) -> Self {
        Self {
            purchase_receipt_is_pro,
            backend_is_pro,
            combined_is_pro: purchase_receipt_is_pro || backend_is_pro,
        }
    }
}

/// OR-merge of the backend plan and the purchase receipt.
///
/// The backend can lag a completed purchase by the webhook propagation delay,
/// while the receipt is authoritative locally right after the transaction.
pub fn combined_is_pro(entitlements: &Entitlements, purchase_receipt_is_premium: bool) -> bool {
    entitlements.is_pro() || purchase_receipt_is_premium
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use openinvite_types::{Plan, UsageCounts};

    use super::*;

    fn with_plan(plan: Plan) -> Entitlements {
        Entitlements::for_plan(plan, UsageCounts::default())
    }

    #[test]
    fn test_combined_is_pro_truth_table() {
        assert!(!combined_is_pro(&with_plan(Plan::Free), false));
        assert!(combined_is_pro(&with_plan(Plan::Free), true));
        assert!(combined_is_pro(&with_plan(Plan::Pro), false));
        assert!(combined_is_pro(&with_plan(Plan::Pro), true));
    }

    #[test]
    fn test_lifetime_counts_as_pro() {
        assert!(combined_is_pro(&with_plan(Plan::LifetimePro), false));
    }

    #[test]
    fn test_refresh_result_merges() {
        let result = ProRefreshResult::new(true, false);
        assert!(result.combined_is_pro);
        assert!(!ProRefreshResult::new(false, false).combined_is_pro);
    }

    #[test]
    fn test_refresh_reason_parse() {
        assert_eq!(
            RefreshReason::from_str("promo_redeem").unwrap(),
            RefreshReason::PromoRedeem
        );
        assert_eq!(RefreshReason::Restore.to_string(), "restore");
        assert!(RefreshReason::from_str("webhook").is_err());
    }
}
