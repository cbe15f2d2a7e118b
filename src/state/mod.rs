//! Per-strategy-instance owned state (spec §3 Ownership, §9 "no
//! process-wide singletons beyond the logger").
//!
//! Grounded on the teacher's `state::Shared` (a `DashMap` of per-ticker
//! state behind a `Notify`), scoped down to one market per runtime since
//! spec §4.J's cycle coordinator rotates a runtime's single market rather
//! than the teacher's multi-ticker registry — the core's "several
//! concurrent strategy instances" (spec §9) are several `StrategyRuntime`s,
//! not several tickers inside one.

pub mod order;
pub mod paired_trade;
pub mod position;
pub mod risk;

use std::sync::Mutex;

use dashmap::DashMap;
use tokio::sync::Notify;

use crate::kinematics::PriceKinematicsTracker;
use crate::market::Market;

use order::OrderCache;
use paired_trade::PairedTrade;
use risk::RiskExposure;

/// All mutable state owned by one running strategy instance. Each
/// sub-component (spec §5 "one mutex per stateful component") guards its
/// own slice; there is no single big lock, so cross-component calls never
/// nest locks. `risk_exposures` is a `DashMap` rather than a
/// `Mutex<HashMap<_>>` — grounded on the teacher's `Shared` registry — since
/// the risk manager and the paired-state-machine poll loop both touch
/// individual exposures concurrently and shouldn't contend on a whole-map lock.
pub struct StrategyRuntime {
    pub market: Mutex<Market>,
    pub kinematics: Mutex<PriceKinematicsTracker>,
    pub paired_trade: Mutex<PairedTrade>,
    pub risk_exposures: DashMap<String, RiskExposure>,
    pub orders: Mutex<OrderCache>,
    /// Woken whenever new market data arrives, mirroring the teacher's
    /// `Shared.notify` + tick-interval `tokio::select!` pattern.
    pub notify: Notify,
}

impl StrategyRuntime {
    pub fn new(market: Market, window_seconds: i64) -> Self {
        Self {
            market: Mutex::new(market),
            kinematics: Mutex::new(PriceKinematicsTracker::new(window_seconds)),
            paired_trade: Mutex::new(PairedTrade::default()),
            risk_exposures: DashMap::new(),
            orders: Mutex::new(OrderCache::new()),
            notify: Notify::new(),
        }
    }

    /// Cycle-boundary reset (spec §4.J step 3): fresh kinematics, fresh
    /// paired-trade state, cleared exposures. Caller is responsible for
    /// snapshotting positions for the outgoing market *before* calling
    /// this, and for swapping in the new `Market` separately.
    pub fn reset_for_new_cycle(&self, window_seconds: i64) {
        *self.kinematics.lock().unwrap() = PriceKinematicsTracker::new(window_seconds);
        self.paired_trade.lock().unwrap().reset_for_new_cycle();
        self.risk_exposures.clear();
    }
}
