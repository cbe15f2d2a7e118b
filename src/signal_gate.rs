//! Component I: signal gate (spec §4.I) — the per-tick pipeline that
//! decides whether, and on which side, to enter a new paired trade.
//!
//! Grounded on the teacher's `engine/signal.rs` + `engine/decision.rs`
//! (a chain of early-return guards feeding a final `decide()` dispatch),
//! generalized to this spec's twelve-step gate: market match, warmup,
//! cooldown, trade cap, cycle-end protection, sample update, qualify, pick
//! direction, price bounds, unhedged-risk gate, optional bias gate, dispatch.

use std::time::Instant;

use crate::config::{BiasMode, Config};
use crate::kinematics::{DirectionMode, PriceKinematicsTracker};
use crate::market::Market;
use crate::state::paired_trade::PairedTrade;
use crate::state::risk::RiskExposure;
use crate::types::TokenType;

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// A named step blocked the tick; nothing happens.
    Blocked(&'static str),
    /// All steps passed: enter a trade on `token` at `price_cents`.
    Enter { token: TokenType, price_cents: u8 },
}

/// Current state of the out-of-scope external candle-shape bias feed (spec
/// §4.I step 11). `ready=false` before the feed has resolved the current
/// 1-minute bar; `token=None` means the bar is neutral (no lean either way).
#[derive(Debug, Clone, Copy)]
pub struct BiasSignal {
    pub ready: bool,
    pub token: Option<TokenType>,
    /// When this strategy instance started waiting on the current bar, used
    /// to apply `open_1m_max_wait_seconds`.
    pub waiting_since: Instant,
}

pub struct SignalGate;

impl SignalGate {
    /// Evaluate one tick. `now_ms`/`now` are the same instant in two clock
    /// domains (kinematics samples are timestamped in epoch ms, cooldowns
    /// and warmup in `Instant`), mirroring how the teacher's tracker and
    /// state machine each keep the clock domain they need.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        cfg: &Config,
        market: &Market,
        expected_market_slug: &str,
        started_at: Instant,
        trade: &PairedTrade,
        kinematics: &PriceKinematicsTracker,
        now_ms: i64,
        now: Instant,
        yes_ask_cents: Option<u8>,
        no_ask_cents: Option<u8>,
        cycle_end_unix: i64,
        now_unix: i64,
        unhedged_exposures: &[&RiskExposure],
        bias: Option<BiasSignal>,
    ) -> GateDecision {
        // 1. Market match: a tick for a stale market slug is ignored.
        if market.slug != expected_market_slug {
            return GateDecision::Blocked("market_mismatch");
        }

        // 2. Warmup: no trading until the strategy has been running long enough.
        if now.saturating_duration_since(started_at).as_millis() < cfg.warmup_ms as u128 {
            return GateDecision::Blocked("warmup");
        }

        // 3. Cooldown.
        if trade.in_cooldown(now) {
            return GateDecision::Blocked("cooldown");
        }

        // 4. Trade cap (0 = unlimited).
        if cfg.max_trades_per_cycle > 0 && trade.trades_this_cycle >= cfg.max_trades_per_cycle {
            return GateDecision::Blocked("trade_cap");
        }

        // 5. Cycle-end protection: no new entries too close to expiry.
        let protection_seconds = cfg.cycle_end_protection_minutes * 60;
        if cycle_end_unix - now_unix <= protection_seconds {
            return GateDecision::Blocked("cycle_end_protection");
        }

        // 6. Already in flight -> nothing to enter.
        if trade.is_in_flight() {
            return GateDecision::Blocked("already_in_flight");
        }

        // Resolve the external bias, applying the open1mMaxWaitSeconds
        // timeout: a bar that never reports readiness is treated as ready
        // with a neutral (empty) token rather than blocking forever.
        let effective_bias = Self::resolve_bias(cfg, bias, now);
        let (bias_blocked, effective_bias) = match effective_bias {
            BiasResolution::NotReady => (true, None),
            BiasResolution::Resolved(token) => (false, token),
        };
        if bias_blocked {
            return GateDecision::Blocked("bias_not_ready");
        }

        // 7. Qualify: does either token clear the velocity+displacement
        // thresholds, bias-adjusted for whichever side opposes the bias.
        let up_qualifies = Self::qualifies_with_bias(cfg, kinematics, TokenType::Up, now_ms, effective_bias);
        let down_qualifies = Self::qualifies_with_bias(cfg, kinematics, TokenType::Down, now_ms, effective_bias);

        // 8. Pick direction.
        let token = match (up_qualifies, down_qualifies) {
            (true, false) => TokenType::Up,
            (false, true) => TokenType::Down,
            (true, true) => Self::pick_preferred(cfg, now_ms, kinematics, yes_ask_cents, no_ask_cents),
            (false, false) => return GateDecision::Blocked("no_qualifying_move"),
        };

        // 9. Price bounds on the chosen token's current ask.
        let ask = match token {
            TokenType::Up => yes_ask_cents,
            TokenType::Down => no_ask_cents,
        };
        let Some(price) = ask else { return GateDecision::Blocked("no_price") };
        if price < cfg.min_entry_price_cents || price > cfg.max_entry_price_cents {
            return GateDecision::Blocked("price_out_of_bounds");
        }

        // 10. Unhedged-risk gate: refuse new entries while an existing
        // exposure is still unhedged (spec §4.I, §8 invariant: at most one
        // unhedged exposure outstanding at a time per market).
        if unhedged_exposures.iter().any(|e| !e.is_hedged()) {
            return GateDecision::Blocked("unhedged_exposure_outstanding");
        }

        // 11. Hard bias mode only allows the biased direction through; soft
        // mode already did its work above by raising the opposite side's
        // qualify thresholds.
        if cfg.bias_mode == BiasMode::Hard {
            if let Some(biased) = effective_bias {
                if token != biased {
                    return GateDecision::Blocked("bias_hard_mismatch");
                }
            }
        }

        // 12. Dispatch.
        GateDecision::Enter { token, price_cents: price }
    }

    fn resolve_bias(cfg: &Config, bias: Option<BiasSignal>, now: Instant) -> BiasResolution {
        if cfg.bias_mode == BiasMode::Off {
            return BiasResolution::Resolved(None);
        }
        let Some(b) = bias else { return BiasResolution::Resolved(None) };
        if b.ready {
            return BiasResolution::Resolved(b.token);
        }
        let waited = now.saturating_duration_since(b.waiting_since).as_secs();
        if waited >= cfg.open_1m_max_wait_seconds {
            // Timed out: spec treats this as biasReady=true, biasToken="".
            BiasResolution::Resolved(None)
        } else {
            BiasResolution::NotReady
        }
    }

    /// Qualify one side, widening its thresholds when a resolved bias
    /// opposes it (spec §4.I step 7: `opposite_bias_velocity_multiplier`,
    /// `opposite_bias_min_move_extra_cents`).
    fn qualifies_with_bias(
        cfg: &Config,
        kinematics: &PriceKinematicsTracker,
        token: TokenType,
        now_ms: i64,
        effective_bias: Option<TokenType>,
    ) -> bool {
        let opposes_bias = matches!(effective_bias, Some(biased) if biased != token);
        let (min_velocity, min_move) = if opposes_bias && cfg.bias_mode == BiasMode::Soft {
            (
                cfg.min_velocity_cents_per_sec * cfg.opposite_bias_velocity_multiplier,
                cfg.min_move_cents + cfg.opposite_bias_min_move_extra_cents,
            )
        } else {
            (cfg.min_velocity_cents_per_sec, cfg.min_move_cents)
        };
        kinematics.qualifies(token, now_ms, min_velocity, min_move, DirectionMode::Positive)
    }

    /// Both sides qualify: the faster side wins (spec §4.I step 8). Only on
    /// an exact velocity tie does `prefer_higher_price` apply, and even then
    /// only if a side's ask is both strictly higher than the other's and at
    /// least `min_preferred_price_cents`; otherwise default to UP.
    fn pick_preferred(
        cfg: &Config,
        now_ms: i64,
        kinematics: &PriceKinematicsTracker,
        yes_ask_cents: Option<u8>,
        no_ask_cents: Option<u8>,
    ) -> TokenType {
        let up_v = kinematics.velocity(TokenType::Up, now_ms).velocity_cents_per_sec.abs();
        let down_v = kinematics.velocity(TokenType::Down, now_ms).velocity_cents_per_sec.abs();

        if up_v > down_v {
            return TokenType::Up;
        }
        if down_v > up_v {
            return TokenType::Down;
        }

        if cfg.prefer_higher_price {
            if let (Some(up_price), Some(down_price)) = (yes_ask_cents, no_ask_cents) {
                if up_price > down_price && up_price >= cfg.min_preferred_price_cents {
                    return TokenType::Up;
                }
                if down_price > up_price && down_price >= cfg.min_preferred_price_cents {
                    return TokenType::Down;
                }
            }
        }
        TokenType::Up
    }
}

enum BiasResolution {
    NotReady,
    Resolved(Option<TokenType>),
}
