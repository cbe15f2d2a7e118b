//! Component H: paired order state machine (spec §4.H) — the core's
//! largest component. Drives one [`PairedTrade`] through
//! `Idle -> Placing -> Open -> {PrimaryOpen, HedgeOpen} -> Filled -> Merging
//! -> Cooldown -> Idle`, owns the price-stop monitor, and reconciles order
//! state against the collaborator when a fill arrives under a different id
//! than the one the core placed it with.
//!
//! Grounded on the teacher's `engine/decision.rs::decide()` (a single
//! priority-ordered dispatch function consulted every tick) and
//! `state/orders.rs` (the id-keyed cache this component reconciles
//! against), generalized from "pick the next maker/taker action" to the
//! full paired-trade lifecycle spec §4.H describes.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{info, warn};

use crate::collaborator::{Collaborator, PlaceOrderRequest};
use crate::config::{Config, HedgeStyle};
use crate::errors::CoreError;
use crate::market::Market;
use crate::pricer::price_pair_lock;
use crate::state::order::OrderCache;
use crate::state::paired_trade::{PairedTrade, StopLevel, TradeState};
use crate::types::{OrderSide, OrderStatus, Tif, TokenType};

pub struct PairedStateMachine;

impl PairedStateMachine {
    /// Enter a new paired trade: place the primary (entry) leg. Refuses if
    /// one is already in flight (spec §8 invariant 4).
    pub async fn enter(
        cfg: &Config,
        market: &Market,
        trade: &mut PairedTrade,
        token: TokenType,
        price_cents: u8,
        size: u64,
        collaborator: &dyn Collaborator,
    ) -> Result<(), CoreError> {
        if trade.is_in_flight() {
            return Err(CoreError::InvariantViolation("paired trade already in flight".into()));
        }
        if price_cents < cfg.min_entry_price_cents || price_cents > cfg.max_entry_price_cents {
            return Err(CoreError::PrecheckViolation("entry price out of configured bounds".into()));
        }

        let asset_id = match token {
            TokenType::Up => &market.yes_asset_id,
            TokenType::Down => &market.no_asset_id,
        };

        let req = PlaceOrderRequest {
            market_slug: market.slug.clone(),
            asset_id: asset_id.clone(),
            token_type: token,
            side: OrderSide::Buy,
            price_cents,
            size,
            order_type: Tif::Gtc,
            client_order_id: uuid::Uuid::new_v4().to_string(),
            is_entry_order: true,
        };

        trade.state = TradeState::Placing;
        let placed = collaborator.place_order(req).await?;

        trade.primary_token = Some(token);
        trade.primary_order_id = Some(placed.id);
        trade.state = TradeState::Open;
        // Counts against the per-cycle cap the moment a trade is live, not
        // only if it survives to cooldown (spec §3/§8 invariant 3) — a
        // hard-reset or abandoned trade must not escape the cap.
        trade.trades_this_cycle += 1;
        info!(market = %market.slug, token = token.as_str(), price_cents, "primary leg placed");
        Ok(())
    }

    /// Primary leg filled: compute the hedge lock price and place the
    /// hedge leg (spec §4.H `OPEN -> PRIMARY_OPEN` on partial confirmation,
    /// `-> HEDGE_OPEN` once the hedge is resting).
    pub async fn on_primary_filled(
        cfg: &Config,
        market: &Market,
        trade: &mut PairedTrade,
        fill_price_cents: u8,
        fill_size: u64,
        collaborator: &dyn Collaborator,
    ) -> Result<(), CoreError> {
        let primary_token = trade.primary_token.ok_or_else(|| {
            CoreError::InvariantViolation("primary fill with no primary token tracked".into())
        })?;

        trade.primary_fill_cents = Some(fill_price_cents);
        trade.primary_fill_size = Some(fill_size);
        trade.state = TradeState::PrimaryOpen;

        let hedge_token = primary_token.opposite();
        let lock = price_pair_lock(fill_price_cents, cfg.profit_cents, cfg.min_entry_price_cents, cfg.max_entry_price_cents)
            .ok_or_else(|| CoreError::PrecheckViolation("no hedge price recovers target profit".into()))?;

        let asset_id = match hedge_token {
            TokenType::Up => &market.yes_asset_id,
            TokenType::Down => &market.no_asset_id,
        };

        let req = PlaceOrderRequest {
            market_slug: market.slug.clone(),
            asset_id: asset_id.clone(),
            token_type: hedge_token,
            side: OrderSide::Buy,
            price_cents: lock.hedge_cents,
            size: fill_size,
            order_type: Tif::Gtc,
            client_order_id: uuid::Uuid::new_v4().to_string(),
            is_entry_order: false,
        };
        let placed = collaborator.place_order(req).await?;

        trade.hedge_token = Some(hedge_token);
        trade.hedge_order_id = Some(placed.id);
        trade.hedge_target_cents = Some(lock.hedge_cents);
        trade.state = TradeState::HedgeOpen;
        info!(market = %market.slug, hedge_token = hedge_token.as_str(), hedge_price = lock.hedge_cents, "hedge leg placed");
        Ok(())
    }

    /// Hedge leg filled: the pair is complete (spec §4.H `HEDGE_OPEN ->
    /// FILLED`). The caller (cycle coordinator / auto-merge controller) is
    /// responsible for the `FILLED -> MERGING` transition.
    pub fn on_hedge_filled(trade: &mut PairedTrade) {
        trade.hedge_filled = true;
        trade.state = TradeState::Filled;
    }

    /// `FILLED -> MERGING -> COOLDOWN`: called once a merge has been
    /// submitted for this trade's complete set.
    pub fn enter_merging(trade: &mut PairedTrade) {
        trade.state = TradeState::Merging;
    }

    pub fn enter_cooldown(trade: &mut PairedTrade, until: Instant) {
        trade.cooldown_until = Some(until);
        trade.state = TradeState::Cooldown;
    }

    pub fn exit_cooldown_if_elapsed(trade: &mut PairedTrade, now: Instant) {
        if trade.state == TradeState::Cooldown && !trade.in_cooldown(now) {
            trade.reset_to_idle();
        }
    }

    /// Price-stop monitor (spec §4.H, HEDGE_OPEN only): escalate soft/hard
    /// stop levels as the unrealized loss on an unfilled hedge worsens, and
    /// act on each new escalation. Levels never downgrade within a trade's
    /// lifetime, so a level that was already reached doesn't recancel/resubmit
    /// every tick. Refuses outright (no action taken on the hedge) and
    /// triggers a 5s risk-off window once the loss clears
    /// `max_acceptable_loss_cents` regardless of soft/hard.
    pub async fn check_price_stop(
        cfg: &Config,
        market: &Market,
        trade: &mut PairedTrade,
        current_hedge_ask_cents: u8,
        collaborator: &dyn Collaborator,
    ) -> Result<(), CoreError> {
        if !cfg.price_stop_enabled || trade.state != TradeState::HedgeOpen {
            return Ok(());
        }
        let Some(primary_cents) = trade.primary_fill_cents else { return Ok(()) };

        let pnl_cents = 100i64 - primary_cents as i64 - current_hedge_ask_cents as i64;

        if -pnl_cents > cfg.max_acceptable_loss_cents {
            warn!(market = %market.slug, pnl_cents, cap = cfg.max_acceptable_loss_cents, "price stop refused, triggering risk-off");
            collaborator.trigger_risk_off(5_000).await;
            return Err(CoreError::PriceStopRefused { loss_cents: -pnl_cents, cap_cents: cfg.max_acceptable_loss_cents });
        }

        let prior_level = trade.stop_level;

        if pnl_cents <= cfg.price_stop_hard_loss_cents {
            trade.escalate_stop(StopLevel::Hard);
            if trade.stop_level != prior_level {
                Self::resubmit_hedge_at_stop(cfg, market, trade, current_hedge_ask_cents, cfg.taker_offset_cents, Tif::Fak, collaborator).await?;
            }
        } else if pnl_cents <= cfg.price_stop_soft_loss_cents {
            trade.escalate_stop(StopLevel::Soft);
            if trade.stop_level != prior_level {
                let tif = if cfg.hedge_style == HedgeStyle::Taker { Tif::Fak } else { Tif::Gtc };
                Self::resubmit_hedge_at_stop(cfg, market, trade, current_hedge_ask_cents, 0, tif, collaborator).await?;
            }
        }
        Ok(())
    }

    /// Cancel the resting hedge and resubmit at `ask + offset_cents` under
    /// `tif` (spec §4.H price-stop HARD/SOFT actions).
    async fn resubmit_hedge_at_stop(
        cfg: &Config,
        market: &Market,
        trade: &mut PairedTrade,
        ask_cents: u8,
        offset_cents: i64,
        tif: Tif,
        collaborator: &dyn Collaborator,
    ) -> Result<(), CoreError> {
        let Some(hedge_order_id) = trade.hedge_order_id.clone() else { return Ok(()) };
        let hedge_token = trade
            .hedge_token
            .ok_or_else(|| CoreError::InvariantViolation("price stop fired with no hedge token tracked".into()))?;

        collaborator.cancel_order(&hedge_order_id).await?;

        let asset_id = match hedge_token {
            TokenType::Up => &market.yes_asset_id,
            TokenType::Down => &market.no_asset_id,
        };
        let price = (ask_cents as i64 + offset_cents).clamp(cfg.min_entry_price_cents as i64, cfg.max_entry_price_cents as i64) as u8;

        let req = PlaceOrderRequest {
            market_slug: market.slug.clone(),
            asset_id: asset_id.clone(),
            token_type: hedge_token,
            side: OrderSide::Buy,
            price_cents: price,
            size: trade.primary_fill_size.unwrap_or(0),
            order_type: tif,
            client_order_id: uuid::Uuid::new_v4().to_string(),
            is_entry_order: false,
        };
        let placed = collaborator.place_order(req).await?;

        trade.hedge_order_id = Some(placed.id);
        trade.hedge_target_cents = Some(price);
        info!(market = %market.slug, price, level = ?trade.stop_level, "price stop repriced hedge");
        Ok(())
    }

    /// Convergence sweeper (spec §4.H): periodically scan all open orders
    /// for this market and cancel anything that isn't the tracked primary or
    /// hedge leg, so a stray order never locks up capital unbounded.
    pub async fn sweep_orphan_orders(cfg: &Config, market: &Market, trade: &PairedTrade, collaborator: &dyn Collaborator) -> usize {
        if !cfg.enforce_order_convergence {
            return 0;
        }

        let keep: HashSet<&str> =
            [trade.primary_order_id.as_deref(), trade.hedge_order_id.as_deref()].into_iter().flatten().collect();

        let mut canceled = 0;
        for order in collaborator.get_active_orders(&market.slug).await {
            if !keep.contains(order.id.as_str()) {
                match collaborator.cancel_order(&order.id).await {
                    Ok(()) => {
                        canceled += 1;
                        warn!(market = %market.slug, order_id = %order.id, "canceled orphan order outside convergence set");
                    }
                    Err(e) => warn!(market = %market.slug, order_id = %order.id, error = %e, "failed to cancel orphan order"),
                }
            }
        }
        canceled
    }

    /// "Order matching by attributes" (spec §4.H): reconcile a fill reported
    /// under an unfamiliar id by matching it to a tracked order on (asset,
    /// side, size, price, recency), falling back to an authoritative WS ->
    /// API sync when no order-cache entry owns it at all. Distinct from
    /// [`Self::sweep_orphan_orders`], which cancels untracked orders rather
    /// than reconciling fills against them.
    pub async fn reconcile_fill_by_attributes(
        order_cache: &mut OrderCache,
        reported_order_id: &str,
        asset_id: &str,
        side: OrderSide,
        size_hint: u64,
        price_hint_cents: u8,
        fill_size: u64,
        fill_price_cents: u8,
        now: Instant,
        collaborator: &dyn Collaborator,
    ) -> Option<bool> {
        if order_cache.get(reported_order_id).is_none() {
            if let Some(rewritten) =
                order_cache.rewrite_id_if_matched(reported_order_id, asset_id, side, size_hint, price_hint_cents, now)
            {
                return order_cache.apply_fill(&rewritten, fill_size, fill_price_cents, now);
            }

            if let Some(order) = collaborator.sync_order_status(reported_order_id).await {
                order_cache.insert(order);
            } else {
                warn!(order_id = reported_order_id, "fill for unknown order, no WS/API reconciliation possible");
                return None;
            }
        }

        order_cache.apply_fill(reported_order_id, fill_size, fill_price_cents, now)
    }
}
