//! Reference [`Collaborator`] implementation: an in-memory paper-trading
//! adapter that fills orders immediately against a caller-fed top of book,
//! used by the crate's own tests and as a template for a real exchange
//! adapter.
//!
//! Grounded on the teacher's `exec/paper.rs` (maker orders fill once the
//! tape trades through their price) simplified down to "fill immediately if
//! the requested price crosses the current top of book" — the teacher's
//! queue-position and partial-fill simulation models a concept
//! (`resting_hint`/`queue_ahead`) that belongs to the order-book wire
//! protocol this crate treats as an opaque, out-of-scope collaborator
//! (spec §1, §9).

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use crate::collaborator::{Collaborator, PlaceOrderRequest, TopOfBook};
use crate::errors::CoreError;
use crate::market::Market;
use crate::state::order::Order;
use crate::state::position::Position;
use crate::types::{OrderStatus, TokenType};

pub struct PaperCollaborator {
    book: Mutex<TopOfBook>,
    orders: Mutex<Vec<Order>>,
}

impl PaperCollaborator {
    pub fn new(book: TopOfBook) -> Self {
        Self { book: Mutex::new(book), orders: Mutex::new(Vec::new()) }
    }

    pub fn set_book(&self, book: TopOfBook) {
        *self.book.lock().unwrap() = book;
    }
}

#[async_trait]
impl Collaborator for PaperCollaborator {
    async fn get_top_of_book(&self, _market: &Market) -> Result<TopOfBook, CoreError> {
        Ok(*self.book.lock().unwrap())
    }

    async fn get_best_price(&self, _asset_id: &str) -> Result<(Option<u8>, Option<u8>), CoreError> {
        let book = self.book.lock().unwrap();
        Ok((book.yes_bid, book.yes_ask))
    }

    async fn place_order(&self, req: PlaceOrderRequest) -> Result<Order, CoreError> {
        let ask = self.book.lock().unwrap().ask_for(req.token_type);
        let crosses = ask.map(|a| req.price_cents >= a).unwrap_or(false);

        let (status, filled_size, filled_price_cents, filled_at) = if crosses {
            info!(asset_id = %req.asset_id, price = req.price_cents, size = req.size, "PAPER order filled");
            (OrderStatus::Filled, req.size, Some(req.price_cents), Some(std::time::Instant::now()))
        } else {
            (OrderStatus::Open, 0, None, None)
        };

        let order = Order {
            id: req.client_order_id.clone(),
            market_slug: req.market_slug,
            asset_id: req.asset_id,
            token_type: req.token_type,
            side: req.side,
            price_cents: req.price_cents,
            size: req.size,
            order_type: req.order_type,
            status,
            filled_size,
            filled_price_cents,
            created_at: std::time::Instant::now(),
            filled_at,
            is_entry_order: req.is_entry_order,
            paired_entry_id: None,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn cancel_order(&self, order_id: &str) -> Result<(), CoreError> {
        let mut orders = self.orders.lock().unwrap();
        if let Some(o) = orders.iter_mut().find(|o| o.id == order_id) {
            if !o.status.is_terminal() {
                o.status = OrderStatus::Canceled;
            }
        }
        Ok(())
    }

    async fn get_order(&self, order_id: &str) -> Option<Order> {
        self.orders.lock().unwrap().iter().find(|o| o.id == order_id).cloned()
    }

    async fn get_active_orders(&self, market_slug: &str) -> Vec<Order> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.market_slug == market_slug && o.status.is_active())
            .cloned()
            .collect()
    }

    async fn get_all_orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    async fn get_open_positions_for_market(&self, market_slug: &str) -> Vec<Position> {
        let orders = self.orders.lock().unwrap();
        [TokenType::Up, TokenType::Down]
            .into_iter()
            .filter_map(|token| {
                let mut pos = Position::new(market_slug, token);
                for o in orders.iter().filter(|o| o.market_slug == market_slug && o.token_type == token && o.filled_size > 0) {
                    pos.apply_fill(o.filled_price_cents.unwrap_or(o.price_cents), o.filled_size as i64);
                }
                pos.is_open().then_some(pos)
            })
            .collect()
    }

    async fn get_all_positions(&self) -> Vec<Position> {
        Vec::new()
    }

    async fn submit_merge(&self, _condition_id: &str, amount: f64, _metadata: &str) -> Result<String, CoreError> {
        Ok(format!("paper-merge-{amount}"))
    }

    async fn refresh_balance(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn reconcile_positions(&self, _market: &Market) -> Result<(), CoreError> {
        Ok(())
    }

    async fn redeem_settled_positions(&self, market: &Market) -> Result<(), CoreError> {
        info!(market = %market.slug, "PAPER settled positions redeemed");
        Ok(())
    }

    async fn sync_order_status(&self, order_id: &str) -> Option<Order> {
        self.get_order(order_id).await
    }

    async fn trigger_risk_off(&self, duration_ms: u64) {
        info!(duration_ms, "PAPER risk-off triggered");
    }
}
