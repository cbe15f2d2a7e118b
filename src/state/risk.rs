//! `RiskExposure` (spec §3): one entry per filled entry-leg awaiting its
//! hedge, owned exclusively by the risk manager (component G).

use std::time::Instant;

use crate::types::{OrderStatus, TokenType};

#[derive(Debug, Clone)]
pub struct RiskExposure {
    pub entry_order_id: String,
    pub entry_token: TokenType,
    pub entry_size: u64,
    pub entry_cents: u8,
    pub entry_filled_at: Instant,
    pub hedge_order_id: Option<String>,
    pub hedge_status: OrderStatus,
    pub max_loss_cents: i64,
    pub aggressive_triggered: bool,
    pub aggressive_at: Option<Instant>,
}

impl RiskExposure {
    pub fn new(
        entry_order_id: impl Into<String>,
        entry_token: TokenType,
        entry_size: u64,
        entry_cents: u8,
        entry_filled_at: Instant,
        max_loss_cents: i64,
    ) -> Self {
        Self {
            entry_order_id: entry_order_id.into(),
            entry_token,
            entry_size,
            entry_cents,
            entry_filled_at,
            hedge_order_id: None,
            hedge_status: OrderStatus::Pending,
            max_loss_cents,
            aggressive_triggered: false,
            aggressive_at: None,
        }
    }

    pub fn exposure_seconds(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.entry_filled_at).as_secs()
    }

    pub fn is_hedged(&self) -> bool {
        self.hedge_status == OrderStatus::Filled
    }
}
