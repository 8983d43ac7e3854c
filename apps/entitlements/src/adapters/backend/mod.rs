use async_trait::async_trait;
use openinvite_sdk::{OpenInviteClient, OpenInviteError};
use openinvite_types::{Entitlements, ErrorCode};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::EntitlementsBackend,
};

/// Entitlements backend served by the Open Invite API.
pub struct OpenInviteBackend {
    client: OpenInviteClient,
}

impl OpenInviteBackend {
    pub fn new(client: OpenInviteClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntitlementsBackend for OpenInviteBackend {
    async fn fetch_entitlements(&self) -> AppResult<Entitlements> {
        self.client
            .fetch_entitlements()
            .await
            .map_err(app_error_from_sdk)
    }
}

fn app_error_from_sdk(err: OpenInviteError) -> AppError {
    match err.code() {
        Some(ErrorCode::Unauthorized) => AppError::Unauthorized,
        _ => AppError::Backend(err.to_string()),
    }
}
