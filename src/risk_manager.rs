//! Component G: risk manager (spec §4.G, scenarios S4 and S5).
//!
//! Grounded on `other_examples`' `RiskManager` (`tokio::select!` over a
//! signal/market channel pair, `RiskConfig` threshold fields, a
//! refuse-or-escalate `RejectionReason` pattern) — adapted from a
//! pre-trade risk gate to this spec's post-fill aggressive-hedge escalation
//! path, since the teacher has no analogous unhedged-exposure concept.

use tracing::{error, warn};

use crate::collaborator::{Collaborator, PlaceOrderRequest};
use crate::config::Config;
use crate::errors::CoreError;
use crate::market::Market;
use crate::state::risk::RiskExposure;
use crate::types::{OrderSide, Tif};

#[derive(Debug, Clone, PartialEq)]
pub enum EscalationOutcome {
    /// Not yet past `aggressive_hedge_timeout_seconds`; nothing to do.
    NotYetDue,
    /// Expected loss exceeded 2x the acceptable cap; refused outright.
    Refused { expected_loss_cents: i64 },
    /// Placed an aggressive FAK hedge despite an unfavorable price.
    Escalated { order_id: String, expected_loss_cents: i64 },
}

pub struct RiskManager;

impl RiskManager {
    pub fn new() -> Self {
        Self
    }

    /// Expected loss if the hedge must be crossed at `worst_ask_cents`
    /// instead of the original lock target (spec §4.G).
    pub fn expected_loss_cents(entry_cents: u8, worst_ask_cents: u8) -> i64 {
        (entry_cents as i64 + worst_ask_cents as i64) - 100
    }

    /// Evaluate one exposure past its timeout: refuse if the expected loss
    /// is more than double the acceptable cap, otherwise submit an
    /// aggressive FAK hedge at the current worst ask (spec §4.G).
    pub async fn escalate(
        &self,
        cfg: &Config,
        market: &Market,
        exposure: &mut RiskExposure,
        hedge_asset_id: &str,
        worst_ask_cents: u8,
        elapsed_seconds: u64,
        collaborator: &dyn Collaborator,
    ) -> Result<EscalationOutcome, CoreError> {
        if elapsed_seconds < cfg.aggressive_hedge_timeout_seconds {
            return Ok(EscalationOutcome::NotYetDue);
        }

        if let Some(hedge_id) = &exposure.hedge_order_id {
            if let Err(e) = collaborator.cancel_order(hedge_id).await {
                warn!(market = %market.slug, error = %e, "stale hedge cancel failed, continuing escalation");
            }
        }

        let expected_loss = Self::expected_loss_cents(exposure.entry_cents, worst_ask_cents);
        let cap = cfg.max_acceptable_loss_cents;

        if expected_loss > cap.saturating_mul(2) {
            error!(market = %market.slug, expected_loss, cap, "refusing aggressive hedge, expected loss too high");
            exposure.aggressive_triggered = true;
            return Err(CoreError::AggressiveHedgeTooExpensive { expected_loss_cents: expected_loss, cap_cents: cap });
        }

        if expected_loss > cap {
            warn!(market = %market.slug, expected_loss, cap, "proceeding with aggressive hedge above acceptable loss cap");
        }

        let req = PlaceOrderRequest {
            market_slug: market.slug.clone(),
            asset_id: hedge_asset_id.to_string(),
            token_type: exposure.entry_token.opposite(),
            side: OrderSide::Buy,
            price_cents: worst_ask_cents,
            size: exposure.entry_size,
            order_type: Tif::Fak,
            client_order_id: uuid::Uuid::new_v4().to_string(),
            is_entry_order: false,
        };
        let placed = collaborator.place_order(req).await?;

        exposure.aggressive_triggered = true;
        exposure.hedge_order_id = Some(placed.id.clone());

        Ok(EscalationOutcome::Escalated { order_id: placed.id, expected_loss_cents: expected_loss })
    }
}

impl Default for RiskManager {
    fn default() -> Self {
        Self::new()
    }
}
