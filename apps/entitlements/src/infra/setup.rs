use std::{fs::File, path::Path, sync::Arc};

use openinvite_sdk::{OpenInviteClient, OpenInviteConfig, SessionToken};
use secrecy::ExposeSecret;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{
        backend::OpenInviteBackend,
        billing::{DisabledReceiptSource, RevenueCatReceiptSource},
        persistence::FileSnapshotStore,
    },
    application::{
        paywall_session::PaywallSession,
        ports::{Clock, PurchaseReceiptSource},
        snapshot_cache::SnapshotCache,
        use_cases::{entitlements::EntitlementsUseCases, pro_refresh::ProRefreshUseCases},
    },
    infra::{app::AppState, clock::SystemClock, config::AppConfig, http_client::try_build_client},
};

pub fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let http_client = try_build_client()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let client = OpenInviteClient::with_http_client(
        OpenInviteConfig {
            base_url: config.api_url.clone(),
            session: SessionToken::from_raw(config.session_token.expose_secret()),
        },
        http_client.clone(),
    )?;
    let backend = Arc::new(OpenInviteBackend::new(client));

    let receipts: Arc<dyn PurchaseReceiptSource> = match config.billing_credentials() {
        Some((api_key, app_user_id)) => Arc::new(RevenueCatReceiptSource::new(
            http_client,
            &config.revenuecat_api_url,
            api_key.clone(),
            app_user_id,
            clock.clone(),
        )?),
        None => {
            info!("billing provider not configured; receipt signal disabled");
            Arc::new(DisabledReceiptSource)
        }
    };

    let store = Arc::new(FileSnapshotStore::new(config.cache_dir.clone()));
    let cache = SnapshotCache::new(store, clock.clone(), config.cache_ttl);

    let entitlements = EntitlementsUseCases::new(
        backend,
        receipts,
        cache,
        clock,
        config.premium_entitlement_id.clone(),
    );
    let refresh = ProRefreshUseCases::new(entitlements.clone());

    Ok(AppState {
        config: Arc::new(config),
        entitlements,
        refresh,
        paywall: Arc::new(PaywallSession::new()),
    })
}

/// Console logs on stderr, plus structured JSON logs when `log_file` is set.
pub fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "openinvite_entitlements=info,openinvite_sdk=info".into());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
