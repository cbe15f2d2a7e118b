//! Strategy configuration surface (spec §6).
//!
//! Shaped exactly like the teacher's `Config`: one flat struct, grouped
//! fields with short inline comments, a hand-written `Default`. No serde —
//! YAML/CLI config loading is an explicit Non-goal (spec §1), so callers
//! build this with `Config { field: value, ..Config::default() }`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HedgeStyle {
    Maker,
    Taker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderExecutionMode {
    Parallel,
    Sequential,
}

/// External candle-shape bias gate (spec §4.I step 11). `Off` skips the
/// gate entirely; the out-of-scope 1-minute/1-second bar feed is never
/// consulted. `Hard` only allows entries on the biased side. `Soft` leaves
/// the opposite side tradeable but raises its qualify thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasMode {
    Off,
    Hard,
    Soft,
}

#[derive(Debug, Clone)]
pub struct Config {
    // Pair economics.
    pub profit_cents: i64,        // target profit per complete set, (0,100)
    pub order_size: u64,
    pub min_entry_price_cents: u8,
    pub max_entry_price_cents: u8,
    pub min_order_usdc: f64,
    pub auto_adjust_size: bool,
    pub max_adjust_ratio: f64, // 0 = unlimited

    // Price-kinematics tracker (component A).
    pub window_seconds: i64,
    pub min_move_cents: i64,
    pub min_velocity_cents_per_sec: f64,

    // Signal gate (component I).
    pub cooldown_ms: u64,
    pub warmup_ms: u64,
    pub max_trades_per_cycle: u32, // 0 = unlimited
    pub cycle_end_protection_minutes: i64,
    pub prefer_higher_price: bool,
    pub min_preferred_price_cents: u8,
    pub opposite_bias_velocity_multiplier: f64,
    pub opposite_bias_min_move_extra_cents: i64,
    pub open_1m_max_wait_seconds: u64,
    pub bias_mode: BiasMode,

    // Hedge placement / reorder (component F).
    pub hedge_offset_cents: i64,
    pub hedge_reorder_timeout_seconds: u64,
    pub hedge_timeout_fak_seconds: u64, // 0 = off
    pub max_reorder_attempts: u32,
    pub allow_negative_profit_on_hedge_reorder: bool,
    pub max_negative_profit_cents: i64,
    pub hedge_monitor_interval_ms: u64,
    pub taker_offset_cents: i64,
    pub hedge_style: HedgeStyle,

    // Risk manager (component G).
    pub aggressive_hedge_timeout_seconds: u64,
    pub max_acceptable_loss_cents: i64,
    pub risk_check_interval_ms: u64,

    // Paired order state machine (component H).
    pub order_execution_mode: OrderExecutionMode,
    pub sequential_primary_max_wait_ms: u64,
    pub sequential_check_interval_ms: u64,
    pub ws_fill_confirm_timeout_seconds: u64,
    pub cancel_if_not_filled_after_confirm: bool,
    pub enforce_order_convergence: bool,
    pub converge_interval_ms: u64,
    pub price_stop_enabled: bool,
    pub price_stop_check_interval_ms: u64,
    pub price_stop_soft_loss_cents: i64, // < 0
    pub price_stop_hard_loss_cents: i64, // < price_stop_soft_loss_cents

    // Auto-merge (component E).
    pub automerge_enabled: bool,
    pub min_complete_sets: f64,
    pub max_complete_sets_per_run: f64, // 0 = unlimited
    pub merge_ratio: f64,               // (0,1]
    pub merge_interval_seconds: u64,
    pub only_if_no_open_orders: bool,
    pub reconcile_after_merge: bool,
    pub reconcile_max_wait_seconds: u64,
    pub merge_trigger_delay_seconds: u64,
    pub merge_metadata: String, // <= 500 chars
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profit_cents: 3,
            order_size: 5,
            min_entry_price_cents: 5,
            max_entry_price_cents: 95,
            min_order_usdc: 1.0,
            auto_adjust_size: true,
            max_adjust_ratio: 0.0,

            window_seconds: 30,
            min_move_cents: 2,
            min_velocity_cents_per_sec: 0.5,

            cooldown_ms: 2_000,
            warmup_ms: 5_000,
            max_trades_per_cycle: 0,
            cycle_end_protection_minutes: 1,
            prefer_higher_price: false,
            min_preferred_price_cents: 50,
            opposite_bias_velocity_multiplier: 1.5,
            opposite_bias_min_move_extra_cents: 1,
            open_1m_max_wait_seconds: 5,
            bias_mode: BiasMode::Off,

            hedge_offset_cents: 0,
            hedge_reorder_timeout_seconds: 15,
            hedge_timeout_fak_seconds: 0,
            max_reorder_attempts: 10,
            allow_negative_profit_on_hedge_reorder: false,
            max_negative_profit_cents: 2,
            hedge_monitor_interval_ms: 1_000,
            taker_offset_cents: 1,
            hedge_style: HedgeStyle::Maker,

            aggressive_hedge_timeout_seconds: 60,
            max_acceptable_loss_cents: 5,
            risk_check_interval_ms: 5_000,

            order_execution_mode: OrderExecutionMode::Parallel,
            sequential_primary_max_wait_ms: 2_000,
            sequential_check_interval_ms: 200,
            ws_fill_confirm_timeout_seconds: 5,
            cancel_if_not_filled_after_confirm: true,
            enforce_order_convergence: true,
            converge_interval_ms: 2_000,
            price_stop_enabled: true,
            price_stop_check_interval_ms: 200,
            price_stop_soft_loss_cents: -3,
            price_stop_hard_loss_cents: -8,

            automerge_enabled: true,
            min_complete_sets: 1.0,
            max_complete_sets_per_run: 0.0,
            merge_ratio: 1.0,
            merge_interval_seconds: 60,
            only_if_no_open_orders: false,
            reconcile_after_merge: true,
            reconcile_max_wait_seconds: 0,
            merge_trigger_delay_seconds: 15,
            merge_metadata: String::new(),
        }
    }
}

impl Config {
    /// Clamp out-of-range values (spec §3, `AutoMergeConfig` normalization
    /// extended to the rest of the surface that has a documented valid
    /// range in spec §6).
    pub fn normalized(mut self) -> Self {
        self.merge_ratio = self.merge_ratio.clamp(f64::MIN_POSITIVE, 1.0);
        if self.merge_metadata.len() > 500 {
            self.merge_metadata.truncate(500);
        }
        self.profit_cents = self.profit_cents.clamp(1, 99);
        if self.min_entry_price_cents > self.max_entry_price_cents {
            std::mem::swap(&mut self.min_entry_price_cents, &mut self.max_entry_price_cents);
        }
        if self.price_stop_hard_loss_cents >= self.price_stop_soft_loss_cents {
            self.price_stop_hard_loss_cents = self.price_stop_soft_loss_cents - 1;
        }
        self
    }
}
