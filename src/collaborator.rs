//! The boundary between the core and every external system it depends on
//! (spec §1, §6, §9).
//!
//! The exchange wire protocol, order-book streams, relayer HTTP client,
//! balance queries, market-metadata resolution, and candlestick feed are
//! all explicitly out of scope — the core only ever invokes them as the
//! opaque operations below. `Collaborator` is the "capability set" spec §9
//! asks for, so several strategy families can share this core through thin
//! wrappers that each implement it differently (a live exchange adapter, a
//! paper-trading adapter, a backtest replay adapter, ...).
//!
//! Implemented with `async-trait` rather than native async-fn-in-trait so
//! `Arc<dyn Collaborator>` works for the "several strategies share the
//! core" dynamic-dispatch case the spec calls for.

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::market::Market;
use crate::state::order::Order;
use crate::state::position::Position;
use crate::types::{OrderSide, Tif, TokenType};

#[derive(Debug, Clone, Copy)]
pub struct TopOfBook {
    pub yes_bid: Option<u8>,
    pub yes_ask: Option<u8>,
    pub no_bid: Option<u8>,
    pub no_ask: Option<u8>,
}

impl TopOfBook {
    pub fn ask_for(&self, token: TokenType) -> Option<u8> {
        match token {
            TokenType::Up => self.yes_ask,
            TokenType::Down => self.no_ask,
        }
    }

    pub fn bid_for(&self, token: TokenType) -> Option<u8> {
        match token {
            TokenType::Up => self.yes_bid,
            TokenType::Down => self.no_bid,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaceOrderRequest {
    pub market_slug: String,
    pub asset_id: String,
    pub token_type: TokenType,
    pub side: OrderSide,
    pub price_cents: u8,
    pub size: u64,
    pub order_type: Tif,
    pub client_order_id: String,
    pub is_entry_order: bool,
}

/// Everything the core needs from the outside world, named after the
/// opaque operations spec §6 lists.
#[async_trait]
pub trait Collaborator: Send + Sync {
    async fn get_top_of_book(&self, market: &Market) -> Result<TopOfBook, CoreError>;
    async fn get_best_price(&self, asset_id: &str) -> Result<(Option<u8>, Option<u8>), CoreError>;

    async fn place_order(&self, req: PlaceOrderRequest) -> Result<Order, CoreError>;
    async fn cancel_order(&self, order_id: &str) -> Result<(), CoreError>;
    async fn get_order(&self, order_id: &str) -> Option<Order>;
    async fn get_active_orders(&self, market_slug: &str) -> Vec<Order>;
    async fn get_all_orders(&self) -> Vec<Order>;

    async fn get_open_positions_for_market(&self, market_slug: &str) -> Vec<Position>;
    async fn get_all_positions(&self) -> Vec<Position>;

    async fn submit_merge(
        &self,
        condition_id: &str,
        amount: f64,
        metadata: &str,
    ) -> Result<String, CoreError>;
    async fn refresh_balance(&self) -> Result<(), CoreError>;
    async fn reconcile_positions(&self, market: &Market) -> Result<(), CoreError>;

    /// Redeem settled complete sets / winning shares for a market that has
    /// resolved (spec §4.J step 6). Called once the outgoing cycle's
    /// redemption timer fires, independent of whether auto-merge ran.
    async fn redeem_settled_positions(&self, market: &Market) -> Result<(), CoreError>;

    async fn sync_order_status(&self, order_id: &str) -> Option<Order>;

    /// Called by the strategy loop when it wants to suppress new entries
    /// for a short "risk-off" window (spec glossary: Risk-off).
    async fn trigger_risk_off(&self, duration_ms: u64);
}
