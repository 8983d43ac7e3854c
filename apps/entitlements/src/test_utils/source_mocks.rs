//! Scriptable stand-ins for the backend and the billing provider.

use async_trait::async_trait;
use openinvite_types::Entitlements;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{EntitlementsBackend, PurchaseReceiptSource},
    domain::entities::customer_info::{CustomerInfo, DEFAULT_PREMIUM_ENTITLEMENT},
};

// ============================================================================
// StubBackend
// ============================================================================

pub struct StubBackend {
    response: Mutex<Result<Entitlements, String>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl StubBackend {
    pub fn ok(entitlements: Entitlements) -> Self {
        Self {
            response: Mutex::new(Ok(entitlements)),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Mutex::new(Err(message.to_string())),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Hold every fetch until `gate` is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_ok(&self, entitlements: Entitlements) {
        *self.response.lock().unwrap() = Ok(entitlements);
    }

    pub fn set_failing(&self, message: &str) {
        *self.response.lock().unwrap() = Err(message.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntitlementsBackend for StubBackend {
    async fn fetch_entitlements(&self) -> AppResult<Entitlements> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .unwrap()
            .clone()
            .map_err(AppError::Backend)
    }
}

// ============================================================================
// StubReceiptSource
// ============================================================================

pub struct StubReceiptSource {
    response: Mutex<Result<CustomerInfo, String>>,
    info_calls: AtomicUsize,
    refresh_calls: AtomicUsize,
}

impl StubReceiptSource {
    pub fn with_info(info: CustomerInfo) -> Self {
        Self {
            response: Mutex::new(Ok(info)),
            info_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
        }
    }

    pub fn premium() -> Self {
        Self::with_info(CustomerInfo::with_active([DEFAULT_PREMIUM_ENTITLEMENT]))
    }

    pub fn not_premium() -> Self {
        Self::with_info(CustomerInfo::default())
    }

    pub fn failing(message: &str) -> Self {
        let stub = Self::not_premium();
        stub.set_failing(message);
        stub
    }

    pub fn set_info(&self, info: CustomerInfo) {
        *self.response.lock().unwrap() = Ok(info);
    }

    pub fn set_failing(&self, message: &str) {
        *self.response.lock().unwrap() = Err(message.to_string());
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> AppResult<CustomerInfo> {
        self.response
            .lock()
            .unwrap()
            .clone()
            .map_err(AppError::Receipt)
    }
}

#[async_trait]
impl PurchaseReceiptSource for StubReceiptSource {
    async fn customer_info(&self) -> AppResult<CustomerInfo> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.respond()
    }

    async fn refresh(&self) -> AppResult<CustomerInfo> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.respond()
    }
}
