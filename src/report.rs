//! Structured logging helpers (spec §7 ambient logging).
//!
//! Grounded on the teacher's `report.rs`: one `tracing::info!` call per
//! snapshot, fields named after the struct they summarize rather than a
//! formatted string.

use tracing::info;

use crate::state::paired_trade::PairedTrade;
use crate::state::position::Position;

pub fn log_position(market_slug: &str, pos: &Position) {
    info!(
        market = %market_slug,
        token = pos.token_type.as_str(),
        size = pos.size,
        avg_price_cents = ?pos.avg_price_cents,
        cost_cents = ?pos.cost_cents(),
        "position snapshot"
    );
}

pub fn log_paired_trade(market_slug: &str, trade: &PairedTrade) {
    info!(
        market = %market_slug,
        state = ?trade.state,
        stop_level = ?trade.stop_level,
        primary_token = ?trade.primary_token,
        primary_fill_cents = ?trade.primary_fill_cents,
        hedge_target_cents = ?trade.hedge_target_cents,
        trades_this_cycle = trade.trades_this_cycle,
        "paired trade snapshot"
    );
}
