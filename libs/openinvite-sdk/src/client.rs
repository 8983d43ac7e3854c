//! Open Invite API client implementation.

use openinvite_types::{Entitlements, ErrorCode};
use tracing::debug;
use url::Url;

use crate::error::OpenInviteError;
use crate::normalize::normalize_entitlements;
use crate::session::SessionToken;

/// Configuration for the Open Invite client.
#[derive(Debug)]
pub struct OpenInviteConfig {
    /// Backend base URL (e.g., "https://api.openinvite.app")
    pub base_url: Url,

    /// Better Auth session token of the signed-in user
    pub session: SessionToken,
}

/// Client for the authenticated Open Invite API.
pub struct OpenInviteClient {
    base_url: Url,
    session: SessionToken,
    http_client: reqwest::Client,
}

impl OpenInviteClient {
    /// Create a new client with a default HTTP client.
    pub fn new(config: OpenInviteConfig) -> Result<Self, OpenInviteError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a new client that reuses an existing HTTP client
    /// (connection pool, timeouts).
    pub fn with_http_client(
        config: OpenInviteConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, OpenInviteError> {
        if config.session.is_empty() {
            return Err(OpenInviteError::Config(
                "session token is required. Sign in first.".into(),
            ));
        }

        if config.base_url.cannot_be_a_base() {
            return Err(OpenInviteError::Config(format!(
                "base_url is not a valid base: {}",
                config.base_url
            )));
        }

        let mut base_url = config.base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            session: config.session,
            http_client,
        })
    }

    /// Absolute URL of the entitlements endpoint.
    pub fn entitlements_url(&self) -> Result<Url, OpenInviteError> {
        self.base_url
            .join("api/entitlements")
            .map_err(|e| OpenInviteError::Config(e.to_string()))
    }

    /// Fetch the signed-in user's entitlements.
    ///
    /// The body is normalized before it is returned, so callers never see
    /// raw payload variants.
    pub async fn fetch_entitlements(&self) -> Result<Entitlements, OpenInviteError> {
        let url = self.entitlements_url()?;

        // Header name must be lowercase.
        let response = self
            .http_client
            .get(url)
            .header("cookie", self.session.cookie_header())
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let code = ErrorCode::from_status(status.as_u16());
            let message = match code {
                ErrorCode::Unauthorized => "Session expired or invalid".to_string(),
                _ => format!("Failed to fetch entitlements: {status}"),
            };
            return Err(OpenInviteError::ApiError { code, message });
        }

        let raw: serde_json::Value = response.json().await?;
        let entitlements = normalize_entitlements(&raw)?;
        debug!(plan = %entitlements.plan, "fetched entitlements");

        Ok(entitlements)
    }
}
