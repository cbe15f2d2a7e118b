//! Order type + the local order cache (spec §3 Order, §4.H attribute matching).
//!
//! Grounded on the teacher's `state/orders.rs`: a `by_client`/`by_order`
//! dual index ("weak backreference: relation + lookup, never ownership",
//! spec §3 Ownership), plus the fill-application helpers. Extended with the
//! attribute-based matcher spec §4.H requires for fills whose reported
//! `orderID` differs from the placement response.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::types::{OrderSide, OrderStatus, Tif, TokenType};

#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub market_slug: String,
    pub asset_id: String,
    pub token_type: TokenType,
    pub side: OrderSide,
    pub price_cents: u8,
    pub size: u64,
    pub order_type: Tif,
    pub status: OrderStatus,
    pub filled_size: u64,
    pub filled_price_cents: Option<u8>,
    pub created_at: Instant,
    pub filled_at: Option<Instant>,
    pub is_entry_order: bool,
    pub paired_entry_id: Option<String>,
}

impl Order {
    /// `filledSize <= size` (spec §3 Order invariants).
    pub fn is_size_consistent(&self) -> bool {
        self.filled_size <= self.size
    }
}

/// Freshness window for attribute-based matching (spec §4.H, §8 law).
const ATTRIBUTE_MATCH_WINDOW: Duration = Duration::from_secs(60);
const ATTRIBUTE_MATCH_SIZE_TOLERANCE: f64 = 0.20;
const ATTRIBUTE_MATCH_PRICE_TOLERANCE_CENTS: i64 = 10;

#[derive(Debug, Default)]
pub struct OrderCache {
    by_id: HashMap<String, Order>,
}

impl OrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, order: Order) {
        self.by_id.insert(order.id.clone(), order);
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.by_id.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.by_id.get_mut(id)
    }

    pub fn active_for_market(&self, market_slug: &str) -> Vec<&Order> {
        self.by_id
            .values()
            .filter(|o| o.market_slug == market_slug && o.status.is_active())
            .collect()
    }

    pub fn all(&self) -> Vec<&Order> {
        self.by_id.values().collect()
    }

    /// Rewrite an order's tracked id when the exchange delivers a fill
    /// under a different id (spec §4.H "Order matching by attributes").
    /// Returns the new id if a rewrite happened.
    pub fn rewrite_id_if_matched(
        &mut self,
        reported_id: &str,
        asset_id: &str,
        side: OrderSide,
        size_hint: u64,
        price_hint_cents: u8,
        now: Instant,
    ) -> Option<String> {
        if self.by_id.contains_key(reported_id) {
            return None;
        }

        let candidate_id = self
            .by_id
            .values()
            .find(|o| {
                o.asset_id == asset_id
                    && o.side == side
                    && o.status.is_active()
                    && now.saturating_duration_since(o.created_at) <= ATTRIBUTE_MATCH_WINDOW
                    && size_delta_within_tolerance(o.size, size_hint)
                    && price_delta_within_tolerance(o.price_cents, price_hint_cents)
            })
            .map(|o| o.id.clone())?;

        let mut order = self.by_id.remove(&candidate_id)?;
        order.id = reported_id.to_string();
        self.by_id.insert(reported_id.to_string(), order);
        Some(reported_id.to_string())
    }

    /// Apply a fill, returning `Some(true)` if now fully filled,
    /// `Some(false)` if partial, `None` if the id is unknown.
    pub fn apply_fill(&mut self, order_id: &str, fill_size: u64, fill_price_cents: u8, now: Instant) -> Option<bool> {
        let order = self.by_id.get_mut(order_id)?;
        order.filled_size = order.filled_size.saturating_add(fill_size).min(order.size);
        order.filled_price_cents = Some(fill_price_cents);

        if order.filled_size >= order.size {
            order.status = OrderStatus::Filled;
            order.filled_at = Some(now);
            Some(true)
        } else {
            order.status = OrderStatus::Partial;
            Some(false)
        }
    }

    pub fn set_status(&mut self, order_id: &str, status: OrderStatus) {
        if let Some(o) = self.by_id.get_mut(order_id) {
            o.status = status;
        }
    }
}

fn size_delta_within_tolerance(a: u64, b: u64) -> bool {
    if a == 0 {
        return b == 0;
    }
    let delta = (a as f64 - b as f64).abs() / a as f64;
    delta <= ATTRIBUTE_MATCH_SIZE_TOLERANCE
}

fn price_delta_within_tolerance(a: u8, b: u8) -> bool {
    (a as i64 - b as i64).abs() <= ATTRIBUTE_MATCH_PRICE_TOLERANCE_CENTS
}
