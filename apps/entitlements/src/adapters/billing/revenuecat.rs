use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{Clock, PurchaseReceiptSource},
    domain::entities::customer_info::CustomerInfo,
};

pub const DEFAULT_REVENUECAT_API_URL: &str = "https://api.revenuecat.com";

/// Purchase receipts read from the RevenueCat REST API.
pub struct RevenueCatReceiptSource {
    client: Client,
    subscriber_url: Url,
    api_key: SecretString,
    clock: Arc<dyn Clock>,
}

impl RevenueCatReceiptSource {
    pub fn new(
        client: Client,
        base_url: &Url,
        api_key: SecretString,
        app_user_id: &str,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        if app_user_id.trim().is_empty() {
            return Err(AppError::InvalidInput("app user id is empty".into()));
        }

        Ok(Self {
            client,
            subscriber_url: subscriber_url(base_url, app_user_id)?,
            api_key,
            clock,
        })
    }

    async fn fetch(&self, bypass_cache: bool) -> AppResult<CustomerInfo> {
        let mut request = self
            .client
            .get(self.subscriber_url.clone())
            .bearer_auth(self.api_key.expose_secret())
            .header(header::ACCEPT, "application/json");
        if bypass_cache {
            request = request.header(header::CACHE_CONTROL, "no-cache");
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Receipt(format!("billing request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Receipt(format!(
                "billing provider returned {}",
                status
            )));
        }

        let body: SubscriberResponse = response
            .json()
            .await
            .map_err(|e| AppError::Receipt(format!("invalid subscriber payload: {}", e)))?;

        let info = customer_info_from_subscriber(&body, self.clock.now());
        debug!(active = ?info.active_entitlements, "fetched customer info");
        Ok(info)
    }
}

#[async_trait]
impl PurchaseReceiptSource for RevenueCatReceiptSource {
    async fn customer_info(&self) -> AppResult<CustomerInfo> {
        self.fetch(false).await
    }

    async fn refresh(&self) -> AppResult<CustomerInfo> {
        self.fetch(true).await
    }
}

fn subscriber_url(base_url: &Url, app_user_id: &str) -> AppResult<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::InvalidInput(format!("invalid billing API URL: {}", base_url)))?
        .pop_if_empty()
        .extend(["v1", "subscribers", app_user_id]);
    Ok(url)
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SubscriberResponse {
    subscriber: Subscriber,
}

#[derive(Debug, Deserialize)]
struct Subscriber {
    #[serde(default)]
    entitlements: HashMap<String, EntitlementInfo>,
}

#[derive(Debug, Deserialize)]
struct EntitlementInfo {
    /// `None` for lifetime purchases.
    expires_date: Option<DateTime<Utc>>,
}

fn customer_info_from_subscriber(body: &SubscriberResponse, now: DateTime<Utc>) -> CustomerInfo {
    CustomerInfo::with_active(
        body.subscriber
            .entitlements
            .iter()
            .filter(|(_, info)| info.expires_date.is_none_or(|expires| expires > now))
            .map(|(id, _)| id.clone()),
    )
}
