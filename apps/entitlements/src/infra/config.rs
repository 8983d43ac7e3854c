use std::path::PathBuf;

use chrono::Duration;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::billing::revenuecat::DEFAULT_REVENUECAT_API_URL,
    application::snapshot_cache::DEFAULT_SNAPSHOT_TTL_SECS,
    domain::entities::customer_info::DEFAULT_PREMIUM_ENTITLEMENT,
};

pub struct AppConfig {
    pub api_url: Url,
    pub session_token: SecretString,
    /// Directory holding the snapshot store files.
    pub cache_dir: PathBuf,
    pub cache_ttl: Duration,
    pub revenuecat_api_url: Url,
    /// Receipt signal is disabled unless both billing settings are present.
    pub revenuecat_api_key: Option<SecretString>,
    pub revenuecat_app_user_id: Option<String>,
    pub premium_entitlement_id: String,
    /// Optional JSON log file, in addition to console logs.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_url: Url = get_env("OPENINVITE_API_URL");
        let session_token =
            SecretString::new(get_env::<String>("OPENINVITE_SESSION_TOKEN").into());

        let cache_dir: PathBuf = get_env_default("ENTITLEMENTS_CACHE_DIR", PathBuf::from(".openinvite"));
        let cache_ttl_secs: i64 = get_env_default("ENTITLEMENTS_CACHE_TTL_SECS", DEFAULT_SNAPSHOT_TTL_SECS);

        let revenuecat_api_url: Url = get_env_default(
            "REVENUECAT_API_URL",
            DEFAULT_REVENUECAT_API_URL
                .parse()
                .expect("default billing URL is valid"),
        );
        let revenuecat_api_key = std::env::var("REVENUECAT_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::new(key.into()));
        let revenuecat_app_user_id = std::env::var("REVENUECAT_APP_USER_ID")
            .ok()
            .filter(|id| !id.is_empty());
        let premium_entitlement_id: String = get_env_default(
            "PREMIUM_ENTITLEMENT_ID",
            DEFAULT_PREMIUM_ENTITLEMENT.to_string(),
        );
        let log_file: Option<PathBuf> = std::env::var("ENTITLEMENTS_LOG_FILE")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self {
            api_url,
            session_token,
            cache_dir,
            cache_ttl: Duration::seconds(cache_ttl_secs.max(0)),
            revenuecat_api_url,
            revenuecat_api_key,
            revenuecat_app_user_id,
            premium_entitlement_id,
            log_file,
        }
    }

    /// Billing API key and subscriber id, when the receipt signal is configured.
    pub fn billing_credentials(&self) -> Option<(&SecretString, &str)> {
        match (&self.revenuecat_api_key, &self.revenuecat_app_user_id) {
            (Some(key), Some(user)) => Some((key, user.as_str())),
            _ => None,
        }
    }
}
