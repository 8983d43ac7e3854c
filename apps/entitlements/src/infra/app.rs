use std::sync::Arc;

use crate::{
    application::{
        paywall_session::PaywallSession,
        use_cases::{entitlements::EntitlementsUseCases, pro_refresh::ProRefreshUseCases},
    },
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub entitlements: EntitlementsUseCases,
    pub refresh: ProRefreshUseCases,
    pub paywall: Arc<PaywallSession>,
}
