use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use openinvite_types::{Entitlements, Plan};
use tracing::{debug, info, instrument, warn};

use crate::{
    app_error::AppResult,
    application::{
        capabilities::Capability,
        ports::{Clock, EntitlementsBackend, PurchaseReceiptSource},
        snapshot_cache::SnapshotCache,
    },
    domain::entities::{
        gate::GateOutcome,
        pro_status::{ProStatus, combined_is_pro},
        snapshot::{EntitlementsSnapshot, SnapshotSource},
    },
};

// ============================================================================
// Signal tracking
// ============================================================================

/// One independently sourced pro signal.
#[derive(Debug, Clone, Copy, Default)]
struct SignalState {
    /// Last resolved value; `None` until the first fetch settles.
    value: Option<bool>,
    in_flight: usize,
}

impl SignalState {
    fn is_loading(&self) -> bool {
        self.in_flight > 0 || self.value.is_none()
    }

    /// A failed fetch settles the signal without discarding what was known.
    fn settle_failed(&mut self) {
        self.value = Some(self.value.unwrap_or(false));
    }
}

#[derive(Debug, Default)]
struct ResolverState {
    /// Bumped on sign-out; results of fetches started before are dropped.
    epoch: u64,
    backend: SignalState,
    receipt: SignalState,
    snapshot: Option<EntitlementsSnapshot>,
}

#[derive(Debug, Clone, Copy)]
enum Signal {
    Backend,
    Receipt,
}

impl ResolverState {
    fn signal_mut(&mut self, signal: Signal) -> &mut SignalState {
        match signal {
            Signal::Backend => &mut self.backend,
            Signal::Receipt => &mut self.receipt,
        }
    }
}

/// Marks a signal as in flight until dropped, so a cancelled fetch cannot
/// leave the resolver loading forever.
struct InFlight {
    state: Arc<Mutex<ResolverState>>,
    signal: Signal,
    epoch: u64,
}

impl InFlight {
    fn start(state: &Arc<Mutex<ResolverState>>, signal: Signal) -> Self {
        let mut guard = lock(state);
        guard.signal_mut(signal).in_flight += 1;
        Self {
            state: state.clone(),
            signal,
            epoch: guard.epoch,
        }
    }

    /// False once the user signed out after this fetch started.
    fn is_current(&self) -> bool {
        lock(&self.state).epoch == self.epoch
    }

    /// Apply `update` unless the user signed out after this fetch started.
    fn apply<T>(&self, update: impl FnOnce(&mut ResolverState) -> T) -> Option<T> {
        let mut state = lock(&self.state);
        if state.epoch != self.epoch {
            debug!("signed out during fetch; dropping result");
            return None;
        }
        Some(update(&mut state))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        if state.epoch != self.epoch {
            return;
        }
        let signal = state.signal_mut(self.signal);
        signal.in_flight = signal.in_flight.saturating_sub(1);
    }
}

fn lock(state: &Mutex<ResolverState>) -> MutexGuard<'_, ResolverState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Use Cases
// ============================================================================

/// Resolves entitlements from the backend and the purchase receipt and
/// answers gating questions against them.
#[derive(Clone)]
pub struct EntitlementsUseCases {
    backend: Arc<dyn EntitlementsBackend>,
    receipts: Arc<dyn PurchaseReceiptSource>,
    cache: SnapshotCache,
    clock: Arc<dyn Clock>,
    premium_entitlement: String,
    state: Arc<Mutex<ResolverState>>,
}

impl EntitlementsUseCases {
    pub fn new(
        backend: Arc<dyn EntitlementsBackend>,
        receipts: Arc<dyn PurchaseReceiptSource>,
        cache: SnapshotCache,
        clock: Arc<dyn Clock>,
        premium_entitlement: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            receipts,
            cache,
            clock,
            premium_entitlement: premium_entitlement.into(),
            state: Arc::new(Mutex::new(ResolverState::default())),
        }
    }

    // ========================================================================
    // Backend signal
    // ========================================================================

    /// Fresh cached snapshot for instant rendering before the first fetch.
    pub async fn cold_start(&self) -> Option<EntitlementsSnapshot> {
        let epoch = lock(&self.state).epoch;
        let snapshot = self.cache.load().await?;
        let mut state = lock(&self.state);
        if state.epoch == epoch && state.snapshot.is_none() {
            state.backend.value = Some(snapshot.entitlements.is_pro());
            state.snapshot = Some(snapshot.clone());
        }
        Some(snapshot)
    }

    /// Fetch entitlements, falling back to the cached snapshot (even a stale
    /// one) when the network fails. Errors only when there is no cache at all.
    #[instrument(skip(self))]
    pub async fn fetch_entitlements(&self) -> AppResult<EntitlementsSnapshot> {
        let in_flight = InFlight::start(&self.state, Signal::Backend);
        self.fetch_tracked(&in_flight).await
    }

    /// Like [`Self::fetch_entitlements`] but never fails. Without network or
    /// disk cache the last snapshot held in memory is kept; with nothing
    /// known at all the app runs in FREE-restricted mode.
    pub async fn entitlements_or_free(&self) -> EntitlementsSnapshot {
        let in_flight = InFlight::start(&self.state, Signal::Backend);
        let err = match self.fetch_tracked(&in_flight).await {
            Ok(snapshot) => return snapshot,
            Err(err) => err,
        };

        let now = self.clock.now();
        in_flight
            .apply(|state| match state.snapshot.as_mut() {
                Some(known) => {
                    warn!(error = %err, "entitlements unavailable; keeping last known snapshot");
                    known.source = SnapshotSource::Cache;
                    known.clone()
                }
                None => {
                    warn!(error = %err, "no entitlements available; using FREE defaults");
                    let snapshot = EntitlementsSnapshot::free_default(now);
                    state.backend.value = Some(false);
                    state.snapshot = Some(snapshot.clone());
                    snapshot
                }
            })
            .unwrap_or_else(|| EntitlementsSnapshot::free_default(now))
    }

    async fn fetch_tracked(&self, in_flight: &InFlight) -> AppResult<EntitlementsSnapshot> {
        match self.backend.fetch_entitlements().await {
            Ok(entitlements) => Ok(self.accept_backend(in_flight, entitlements).await),
            Err(err) => {
                warn!(error = %err, "entitlements fetch failed; trying cache");
                match self.cache.load_stale().await {
                    Some(cached) => {
                        info!(cached_at = %cached.cached_at, "using cached entitlements");
                        self.record_snapshot(in_flight, cached.clone());
                        Ok(cached)
                    }
                    None => {
                        in_flight.apply(|state| state.backend.settle_failed());
                        Err(err)
                    }
                }
            }
        }
    }

    /// Cache-bypassing backend refresh. Returns the backend's pro flag.
    pub(crate) async fn refresh_backend(&self) -> AppResult<bool> {
        let in_flight = InFlight::start(&self.state, Signal::Backend);

        match self.backend.fetch_entitlements().await {
            Ok(entitlements) => {
                let snapshot = self.accept_backend(&in_flight, entitlements).await;
                Ok(snapshot.entitlements.is_pro())
            }
            Err(err) => {
                in_flight.apply(|state| state.backend.settle_failed());
                Err(err)
            }
        }
    }

    async fn accept_backend(
        &self,
        in_flight: &InFlight,
        entitlements: Entitlements,
    ) -> EntitlementsSnapshot {
        let snapshot = EntitlementsSnapshot::from_backend(entitlements, self.clock.now());
        if in_flight.is_current() {
            self.cache.save(&snapshot).await;
            self.record_snapshot(in_flight, snapshot.clone());
        }
        snapshot
    }

    fn record_snapshot(&self, in_flight: &InFlight, snapshot: EntitlementsSnapshot) {
        in_flight.apply(|state| {
            state.backend.value = Some(snapshot.entitlements.is_pro());
            state.snapshot = Some(snapshot);
        });
    }

    // ========================================================================
    // Purchase-receipt signal
    // ========================================================================

    /// Read the receipt signal. Failures are logged and read as not premium.
    #[instrument(skip(self))]
    pub async fn load_receipt_status(&self) -> bool {
        let in_flight = InFlight::start(&self.state, Signal::Receipt);

        match self.receipts.customer_info().await {
            Ok(info) => {
                self.record_receipt(&in_flight, info.has_active(&self.premium_entitlement))
            }
            Err(err) => {
                warn!(error = %err, "purchase receipt unavailable");
                in_flight
                    .apply(|state| {
                        state.receipt.settle_failed();
                        state.receipt.value.unwrap_or(false)
                    })
                    .unwrap_or(false)
            }
        }
    }

    /// Provider-cache-bypassing receipt refresh. Returns the receipt's pro flag.
    pub(crate) async fn refresh_receipt(&self) -> AppResult<bool> {
        let in_flight = InFlight::start(&self.state, Signal::Receipt);

        match self.receipts.refresh().await {
            Ok(info) => Ok(self.record_receipt(
                &in_flight,
                info.has_active(&self.premium_entitlement),
            )),
            Err(err) => {
                in_flight.apply(|state| state.receipt.settle_failed());
                Err(err)
            }
        }
    }

    fn record_receipt(&self, in_flight: &InFlight, is_premium: bool) -> bool {
        in_flight.apply(|state| state.receipt.value = Some(is_premium));
        is_premium
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Resolve both signals concurrently and report the combined status.
    pub async fn load(&self) -> ProStatus {
        tokio::join!(self.entitlements_or_free(), self.load_receipt_status());
        self.pro_status()
    }

    /// Combined pro flag plus whether either signal is still loading.
    pub fn pro_status(&self) -> ProStatus {
        let state = lock(&self.state);
        let receipt_is_premium = state.receipt.value.unwrap_or(false);
        let is_pro = match &state.snapshot {
            Some(snapshot) => combined_is_pro(&snapshot.entitlements, receipt_is_premium),
            None => receipt_is_premium,
        };

        ProStatus {
            is_pro,
            is_loading: state.backend.is_loading() || state.receipt.is_loading(),
        }
    }

    pub fn current_snapshot(&self) -> Option<EntitlementsSnapshot> {
        lock(&self.state).snapshot.clone()
    }

    /// Entitlements capability checks run against.
    ///
    /// A premium receipt with a FREE backend plan means the backend has not
    /// caught up with a purchase yet; pro defaults apply with the server's
    /// usage counts.
    pub fn effective_entitlements(&self) -> Entitlements {
        let state = lock(&self.state);
        let entitlements = state
            .snapshot
            .as_ref()
            .map(|s| s.entitlements.clone())
            .unwrap_or_else(Entitlements::free);

        if state.receipt.value == Some(true) && !entitlements.is_pro() {
            Entitlements::for_plan(Plan::Pro, entitlements.usage)
        } else {
            entitlements
        }
    }

    /// Gate an action. While either signal is loading the answer is
    /// `Pending`, never a deny.
    pub fn gate(&self, capability: Capability) -> GateOutcome {
        if self.pro_status().is_loading {
            return GateOutcome::Pending;
        }

        GateOutcome::Decided {
            decision: capability.check(&self.effective_entitlements()),
        }
    }

    /// Forget everything known about the signed-out user.
    ///
    /// Fetches still in flight are orphaned: their results never reach the
    /// cache or the resolver.
    pub async fn sign_out(&self) {
        {
            let mut state = lock(&self.state);
            *state = ResolverState {
                epoch: state.epoch.wrapping_add(1),
                ..ResolverState::default()
            };
        }
        self.cache.clear().await;
    }
}
