//! Component F: hedge reorder manager (spec §4.F, scenario S3).
//!
//! Grounded on the teacher's `engine/task.rs` `tokio::select!` monitor loop
//! (interval tick racing a notify/cancel signal) and `engine/decision.rs`'s
//! `choose_working_side` repricing logic, generalized from "requote the
//! maker order on hysteresis" to "requote the hedge leg until filled or
//! attempts are exhausted, escalating to a FAK taker fill past a second,
//! independent deadline".

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::collaborator::{Collaborator, PlaceOrderRequest};
use crate::config::Config;
use crate::errors::CoreError;
use crate::market::Market;
use crate::types::{OrderSide, Tif, TokenType};

#[derive(Debug, Clone, PartialEq)]
pub enum ReorderOutcome {
    Filled { order_id: String },
    /// Repriced once more; caller should keep monitoring.
    Repriced { order_id: String, price_cents: u8, attempt: u32 },
    /// The FAK-timeout escalation fired: the resting hedge was canceled and
    /// replaced with a fill-and-kill taker order (spec §4.F scenario S3's
    /// second leg).
    FakSubmitted { order_id: String, price_cents: u8 },
    /// `max_reorder_attempts` reached with no fill; the risk manager takes
    /// over from here (spec §4.F -> §4.G handoff).
    Exhausted,
    /// Hedge was canceled or failed out-of-band; caller should drop it.
    Dropped,
}

/// Per-market single-flight guard so only one reprice runs against a given
/// hedge at a time (spec §5).
pub struct HedgeReorderManager {
    in_flight: tokio::sync::Mutex<()>,
}

impl HedgeReorderManager {
    pub fn new() -> Self {
        Self { in_flight: tokio::sync::Mutex::new(()) }
    }

    /// One monitor tick against two independent deadlines measured from
    /// `entry_filled_at`: `reorderDeadline` (always armed) and `fakDeadline`
    /// (armed only when `hedge_timeout_fak_seconds > 0`). `entry_ask_cents`
    /// is the primary leg's fill-time ask, used to recompute the ideal hedge
    /// price on reorder.
    #[allow(clippy::too_many_arguments)]
    pub async fn monitor_tick(
        &self,
        cfg: &Config,
        market: &Market,
        hedge_token: TokenType,
        hedge_asset_id: &str,
        current_hedge_order_id: &str,
        remaining_size: u64,
        entry_ask_cents: u8,
        entry_filled_at: Instant,
        attempt: u32,
        now: Instant,
        collaborator: &dyn Collaborator,
    ) -> Result<ReorderOutcome, CoreError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            return Ok(ReorderOutcome::Repriced { order_id: current_hedge_order_id.to_string(), price_cents: 0, attempt });
        };

        if let Some(order) = collaborator.get_order(current_hedge_order_id).await {
            if order.status == crate::types::OrderStatus::Filled {
                return Ok(ReorderOutcome::Filled { order_id: current_hedge_order_id.to_string() });
            }
            if order.status.is_terminal() {
                return Ok(ReorderOutcome::Dropped);
            }
        }

        let fak_deadline =
            (cfg.hedge_timeout_fak_seconds > 0).then(|| entry_filled_at + Duration::from_secs(cfg.hedge_timeout_fak_seconds));
        if let Some(deadline) = fak_deadline {
            if now >= deadline {
                return self.handle_fak_timeout(cfg, market, hedge_token, hedge_asset_id, current_hedge_order_id, remaining_size, collaborator).await;
            }
        }

        let reorder_deadline = entry_filled_at + Duration::from_secs(cfg.hedge_reorder_timeout_seconds);
        if now < reorder_deadline {
            return Ok(ReorderOutcome::Repriced {
                order_id: current_hedge_order_id.to_string(),
                price_cents: entry_ask_cents,
                attempt,
            });
        }

        if attempt >= cfg.max_reorder_attempts {
            warn!(market = %market.slug, attempt, "hedge reorder attempts exhausted");
            return Ok(ReorderOutcome::Exhausted);
        }

        self.reorder_hedge(cfg, market, hedge_token, hedge_asset_id, current_hedge_order_id, remaining_size, entry_ask_cents, attempt, collaborator).await
    }

    /// Cancel the stale resting hedge, re-fetch top-of-book, and resubmit a
    /// GTC order at the freshly computed ideal hedge price (spec §4.F
    /// `reorderHedge`).
    #[allow(clippy::too_many_arguments)]
    async fn reorder_hedge(
        &self,
        cfg: &Config,
        market: &Market,
        hedge_token: TokenType,
        hedge_asset_id: &str,
        current_hedge_order_id: &str,
        remaining_size: u64,
        entry_ask_cents: u8,
        attempt: u32,
        collaborator: &dyn Collaborator,
    ) -> Result<ReorderOutcome, CoreError> {
        collaborator.cancel_order(current_hedge_order_id).await?;

        let top = collaborator.get_top_of_book(market).await?;
        let market_ask = top
            .ask_for(hedge_token)
            .ok_or_else(|| CoreError::PrecheckViolation("no ask available for hedge reorder".into()))?;

        let ideal_hedge = 100i64 - entry_ask_cents as i64 - cfg.hedge_offset_cents;
        let new_hedge = if cfg.allow_negative_profit_on_hedge_reorder {
            ideal_hedge.min(market_ask as i64 + cfg.max_negative_profit_cents)
        } else if ideal_hedge < market_ask as i64 {
            ideal_hedge
        } else {
            return Err(CoreError::PrecheckViolation(
                "reorder would cross the market and negative-profit widening is disabled".into(),
            ));
        };
        let new_price = new_hedge.clamp(cfg.min_entry_price_cents as i64, cfg.max_entry_price_cents as i64) as u8;

        let req = PlaceOrderRequest {
            market_slug: market.slug.clone(),
            asset_id: hedge_asset_id.to_string(),
            token_type: hedge_token,
            side: OrderSide::Buy,
            price_cents: new_price,
            size: remaining_size,
            order_type: Tif::Gtc,
            client_order_id: uuid::Uuid::new_v4().to_string(),
            is_entry_order: false,
        };
        let placed = collaborator.place_order(req).await?;

        info!(market = %market.slug, attempt = attempt + 1, price = new_price, "hedge repriced");
        Ok(ReorderOutcome::Repriced { order_id: placed.id, price_cents: new_price, attempt: attempt + 1 })
    }

    /// Cancel the resting hedge and submit a fill-and-kill taker order at
    /// `ask + taker_offset_cents` (spec §4.F `handleFakTimeout`).
    async fn handle_fak_timeout(
        &self,
        cfg: &Config,
        market: &Market,
        hedge_token: TokenType,
        hedge_asset_id: &str,
        current_hedge_order_id: &str,
        remaining_size: u64,
        collaborator: &dyn Collaborator,
    ) -> Result<ReorderOutcome, CoreError> {
        collaborator.cancel_order(current_hedge_order_id).await?;

        let (_bid, ask) = collaborator.get_best_price(hedge_asset_id).await?;
        let ask = ask.ok_or_else(|| CoreError::PrecheckViolation("no ask available for FAK timeout".into()))?;
        let price = (ask as i64 + cfg.taker_offset_cents).clamp(1, 99) as u8;

        let req = PlaceOrderRequest {
            market_slug: market.slug.clone(),
            asset_id: hedge_asset_id.to_string(),
            token_type: hedge_token,
            side: OrderSide::Buy,
            price_cents: price,
            size: remaining_size,
            order_type: Tif::Fak,
            client_order_id: uuid::Uuid::new_v4().to_string(),
            is_entry_order: false,
        };
        let placed = collaborator.place_order(req).await?;

        warn!(market = %market.slug, price, "hedge FAK-timeout escalation fired");
        Ok(ReorderOutcome::FakSubmitted { order_id: placed.id, price_cents: price })
    }
}

impl Default for HedgeReorderManager {
    fn default() -> Self {
        Self::new()
    }
}
