//! Component E: auto-merge controller (spec §4.E, scenarios S1 and S6).
//!
//! Grounded on `other_examples`' Polymarket market-merger accumulator loop
//! (`AccumulatorContext` + `MergeChecker::should_merge()`, a gated
//! continuous-merge trigger over `tracing` status logs) — adapted to this
//! spec's single-flight-per-market controller and its explicit status
//! callback sequence, since the teacher itself has no merge/redemption
//! concept to draw from.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, warn};

use crate::collaborator::Collaborator;
use crate::complete_sets::{compute_complete_sets, CompleteSets};
use crate::config::Config;
use crate::errors::CoreError;
use crate::market::Market;
use crate::state::order::OrderCache;
use crate::state::position::Position;

/// Settlement latency the chain typically takes to reflect a merge before a
/// balance refresh would see it (spec §4.E).
const SETTLEMENT_LATENCY: Duration = Duration::from_secs(2);
/// Poll cadence while waiting out `reconcile_max_wait_seconds`.
const RECONCILE_POLL_INTERVAL: Duration = Duration::from_secs(3);
/// Fallback single sleep-then-reconcile when no wait budget is configured.
const RECONCILE_FALLBACK_SLEEP: Duration = Duration::from_secs(5);

/// Status sequence emitted by [`AutoMergeController::maybe_trigger`] (spec
/// §4.E): `Triggered -> Merging -> Submitted -> RefreshingBalance ->
/// (BalanceRefreshed | BalanceRefreshFailed) -> (Completed | Failed)`.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeStatus {
    Triggered { complete_sets: f64 },
    Merging,
    Submitted { tx_ref: String },
    RefreshingBalance,
    BalanceRefreshed,
    BalanceRefreshFailed { reason: String },
    Completed,
    Failed { reason: String },
}

/// Single-flight auto-merge controller for one market (spec §5: "one mutex
/// per stateful component"). The cycle coordinator (component J) owns a
/// *second* instance for the outgoing cycle's market, per spec §4.J. Always
/// held behind an `Arc` so the detached post-submit worker can outlive the
/// caller's `maybe_trigger` call (spec §4.E: "must never block caller").
pub struct AutoMergeController {
    in_flight: Arc<AsyncMutex<()>>,
    last_merge_at: std::sync::Mutex<Option<Instant>>,
}

impl AutoMergeController {
    pub fn new() -> Self {
        Self { in_flight: Arc::new(AsyncMutex::new(())), last_merge_at: std::sync::Mutex::new(None) }
    }

    fn throttled(&self, cfg: &Config, now: Instant) -> bool {
        let last = *self.last_merge_at.lock().unwrap();
        match last {
            Some(t) => now.saturating_duration_since(t) < Duration::from_secs(cfg.merge_interval_seconds),
            None => false,
        }
    }

    /// Gate, throttle, and inventory checks run synchronously (no network
    /// I/O, so they can't block the caller); once a merge is accepted, the
    /// submit -> refresh -> reconcile pipeline is handed to exactly one
    /// detached `tokio::spawn` worker and this call returns immediately.
    /// `on_status` runs on that worker, so it must be `Send + 'static`.
    pub async fn maybe_trigger(
        self: &Arc<Self>,
        cfg: Config,
        market: Market,
        up_position: Option<&Position>,
        down_position: Option<&Position>,
        orders: &OrderCache,
        collaborator: Arc<dyn Collaborator>,
        now: Instant,
        mut on_status: impl FnMut(MergeStatus) + Send + 'static,
    ) -> Result<(), CoreError> {
        if !cfg.automerge_enabled {
            return Ok(());
        }

        let fallback: Vec<_> = orders.all();
        let sets = compute_complete_sets(up_position, down_position, &fallback);
        if (sets.complete as f64) < cfg.min_complete_sets {
            return Ok(());
        }

        if cfg.only_if_no_open_orders && !orders.active_for_market(&market.slug).is_empty() {
            return Ok(());
        }

        if self.throttled(&cfg, now) {
            return Ok(());
        }

        let amount = merge_amount(sets, &cfg);
        let controller = Arc::clone(self);

        tokio::spawn(async move {
            // Single-flight: a second concurrent accepted call for this
            // market is a no-op, not an error (spec §4.E "never two
            // in-flight merges for the same market"). Checked here, inside
            // the worker, via an owned guard so it's held for the whole
            // pipeline without borrowing the controller.
            let Ok(_guard) = Arc::clone(&controller.in_flight).try_lock_owned() else {
                return;
            };

            on_status(MergeStatus::Triggered { complete_sets: amount });
            on_status(MergeStatus::Merging);

            let tx_ref = match collaborator.submit_merge(&market.condition_id, amount, &cfg.merge_metadata).await {
                Ok(tx_ref) => tx_ref,
                Err(e) => {
                    warn!(market = %market.slug, error = %e, "merge submission failed");
                    on_status(MergeStatus::Failed { reason: e.to_string() });
                    return;
                }
            };
            on_status(MergeStatus::Submitted { tx_ref });
            *controller.last_merge_at.lock().unwrap() = Some(now);

            tokio::time::sleep(SETTLEMENT_LATENCY).await;

            on_status(MergeStatus::RefreshingBalance);
            match collaborator.refresh_balance().await {
                Ok(()) => on_status(MergeStatus::BalanceRefreshed),
                Err(e) => on_status(MergeStatus::BalanceRefreshFailed { reason: e.to_string() }),
            }

            if cfg.reconcile_after_merge {
                Self::reconcile_with_backoff(&cfg, &market, collaborator.as_ref()).await;
            }

            info!(market = %market.slug, amount, "auto-merge completed");
            on_status(MergeStatus::Completed);
        });

        Ok(())
    }

    /// Reconcile once immediately, then either poll every 3s until
    /// `reconcile_max_wait_seconds` elapses, or — when no wait budget is
    /// configured — sleep 5s and reconcile once more (spec §4.E).
    async fn reconcile_with_backoff(cfg: &Config, market: &Market, collaborator: &dyn Collaborator) {
        if let Err(e) = collaborator.reconcile_positions(market).await {
            warn!(market = %market.slug, error = %e, "post-merge reconcile failed");
        }

        if cfg.reconcile_max_wait_seconds == 0 {
            tokio::time::sleep(RECONCILE_FALLBACK_SLEEP).await;
            if let Err(e) = collaborator.reconcile_positions(market).await {
                warn!(market = %market.slug, error = %e, "post-merge reconcile (fallback) failed");
            }
            return;
        }

        let deadline = Instant::now() + Duration::from_secs(cfg.reconcile_max_wait_seconds);
        while Instant::now() < deadline {
            tokio::time::sleep(RECONCILE_POLL_INTERVAL).await;
            if let Err(e) = collaborator.reconcile_positions(market).await {
                warn!(market = %market.slug, error = %e, "post-merge reconcile poll failed");
            }
        }
    }
}

impl Default for AutoMergeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Amount to merge: `complete * merge_ratio`, capped by
/// `max_complete_sets_per_run` when that cap is non-zero.
fn merge_amount(sets: CompleteSets, cfg: &Config) -> f64 {
    let requested = sets.complete as f64 * cfg.merge_ratio;
    if cfg.max_complete_sets_per_run > 0.0 {
        requested.min(cfg.max_complete_sets_per_run)
    } else {
        requested
    }
}
