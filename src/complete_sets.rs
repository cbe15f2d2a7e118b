//! Component D: complete-sets calculator (spec §4.D) — pure function over
//! the caller's current position/order snapshot, deduping by order id and
//! falling back to filled entry orders when a `Position` hasn't been
//! reconciled yet.
//!
//! Grounded on the teacher's `state/position.rs` (`min(yes, no)` complete-set
//! sizing already present there) generalized to this spec's explicit
//! up/down naming and the filled-order fallback spec §4.D adds.

use crate::state::order::Order;
use crate::state::position::Position;
use crate::types::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteSets {
    pub up_size: u64,
    pub down_size: u64,
    pub complete: u64,
}

/// Compute holdings from `Position`s when present; otherwise fall back to
/// summing filled entry orders for that side, deduped by order id, with
/// each order's contribution capped by its own `filled_size <= size`
/// invariant (spec §3, §4.D).
pub fn compute_complete_sets(
    up_position: Option<&Position>,
    down_position: Option<&Position>,
    fallback_orders: &[&Order],
) -> CompleteSets {
    let up_size = holdings_for(up_position, fallback_orders, TokenType::Up);
    let down_size = holdings_for(down_position, fallback_orders, TokenType::Down);
    CompleteSets { up_size, down_size, complete: up_size.min(down_size) }
}

fn holdings_for(position: Option<&Position>, fallback_orders: &[&Order], token: TokenType) -> u64 {
    if let Some(p) = position {
        if p.is_open() {
            return p.size.max(0) as u64;
        }
    }

    let mut seen = std::collections::HashSet::new();
    fallback_orders
        .iter()
        .filter(|o| o.token_type == token && o.is_entry_order && o.filled_size > 0)
        .filter(|o| seen.insert(o.id.clone()))
        .map(|o| o.filled_size.min(o.size))
        .sum()
}
