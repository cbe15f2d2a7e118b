//! Component J: cycle coordinator (spec §4.J, scenario S6).
//!
//! Grounded on the teacher's `market_manager.rs` (discovers the next
//! tradeable market and swaps the active one in), generalized from "follow
//! the most liquid ticker" to this spec's fixed-duration cycle rotation
//! with an outgoing-cycle merge-and-redemption handoff.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::automerge::AutoMergeController;
use crate::collaborator::Collaborator;
use crate::config::Config;
use crate::market::Market;
use crate::state::order::OrderCache;
use crate::state::position::Position;
use crate::types::TokenType;

/// Protective cooldown armed on the freshly active cycle (spec §4.J step 4)
/// so the first price events tagged with the new cycle can't trigger an
/// entry before the reset has fully settled.
const PROTECTIVE_COOLDOWN: Duration = Duration::from_millis(800);

/// One outgoing cycle still being wound down: its own `AutoMergeController`
/// instance (spec §4.J step 5: never share the incoming cycle's single-flight
/// guard with the outgoing one) plus a redemption deadline after which
/// settled-position redemption is invoked and the slot is dropped.
pub struct OutgoingCycle {
    pub market: Market,
    pub merge_controller: Arc<AutoMergeController>,
    pub redemption_deadline: Instant,
}

pub struct CycleCoordinator {
    pub active: Market,
    pub outgoing: Vec<OutgoingCycle>,
}

impl CycleCoordinator {
    pub fn new(active: Market) -> Self {
        Self { active, outgoing: Vec::new() }
    }

    /// `now_unix >= active.cycle_end_unix()`: snapshot the outgoing market's
    /// positions, roll it into `outgoing`, trigger a leftover-complete-set
    /// merge on a dedicated controller, and swap in the next market. Caller
    /// still resets the strategy runtime's per-cycle state separately (spec
    /// §4.J step 3, see [`crate::state::StrategyRuntime::reset_for_new_cycle`])
    /// and should apply the returned deadline as the new cycle's
    /// `cooldown_until` (step 4).
    pub async fn roll_if_elapsed(
        &mut self,
        cfg: &Config,
        next_market: Market,
        now_unix: i64,
        now: Instant,
        redemption_window: Duration,
        collaborator: &Arc<dyn Collaborator>,
    ) -> Option<Instant> {
        if now_unix < self.active.cycle_end_unix() {
            return None;
        }

        let finished = std::mem::replace(&mut self.active, next_market);
        info!(market = %finished.slug, "cycle elapsed, rolling to next market");

        // Snapshot before any reset touches the outgoing market's positions
        // (spec §4.J step 2).
        let snapshot = collaborator.get_open_positions_for_market(&finished.slug).await;
        let up = find_position(&snapshot, TokenType::Up);
        let down = find_position(&snapshot, TokenType::Down);
        let min_held = held_size(up.as_ref()).min(held_size(down.as_ref()));

        let merge_controller = Arc::new(AutoMergeController::new());
        if cfg.automerge_enabled && min_held > 0 {
            let orders = OrderCache::new();
            if let Err(e) = merge_controller
                .maybe_trigger(
                    cfg.clone(),
                    finished.clone(),
                    up.as_ref(),
                    down.as_ref(),
                    &orders,
                    Arc::clone(collaborator),
                    now,
                    |_status| {},
                )
                .await
            {
                warn!(market = %finished.slug, error = %e, "outgoing-cycle merge trigger failed");
            }
        }

        self.outgoing.push(OutgoingCycle {
            market: finished,
            merge_controller,
            redemption_deadline: now + redemption_window,
        });

        Some(now + PROTECTIVE_COOLDOWN)
    }

    /// Invoke settled-position redemption for any outgoing cycle whose
    /// redemption timer has fired, then drop its slot (spec §4.J step 6).
    pub async fn redeem_expired_outgoing(&mut self, now: Instant, collaborator: &Arc<dyn Collaborator>) {
        let mut remaining = Vec::with_capacity(self.outgoing.len());
        for cycle in self.outgoing.drain(..) {
            if now < cycle.redemption_deadline {
                remaining.push(cycle);
                continue;
            }
            if let Err(e) = collaborator.redeem_settled_positions(&cycle.market).await {
                warn!(market = %cycle.market.slug, error = %e, "settled-position redemption failed");
            }
        }
        self.outgoing = remaining;
    }
}

fn find_position(positions: &[Position], token: TokenType) -> Option<Position> {
    positions.iter().find(|p| p.token_type == token).cloned()
}

fn held_size(position: Option<&Position>) -> u64 {
    position.map(|p| p.size.max(0) as u64).unwrap_or(0)
}
