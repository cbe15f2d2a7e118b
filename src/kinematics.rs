//! Component A: price-kinematics tracker (spec §4.A).
//!
//! Grounded on the teacher's `state/flow.rs::Ema` (a bounded rolling
//! smoother fed by ticks, queried on demand) — generalized from an
//! exponential-decay average to the windowed velocity/displacement sample
//! deque spec §4.A calls for, since profit-taking here keys off recent
//! *price movement* rather than an order-flow imbalance signal.

use std::collections::VecDeque;

use crate::types::TokenType;

/// Hard cap on stored samples regardless of window length (spec §4.A,
/// §8 invariant 7: "tolerate >= 10^4 samples/sec bursts without unbounded
/// memory growth").
const MAX_SAMPLES: usize = 512;

#[derive(Debug, Clone, Copy)]
struct Sample {
    ts_ms: i64,
    cents: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionMode {
    /// Velocity must be positive to count as movement "toward" a side.
    Positive,
    /// Movement is scored by absolute magnitude regardless of sign.
    Abs,
}

#[derive(Debug, Clone, Copy)]
pub struct Velocity {
    pub velocity_cents_per_sec: f64,
    pub displacement_cents: i64,
    pub ok: bool,
}

impl Velocity {
    fn unavailable() -> Self {
        Self { velocity_cents_per_sec: 0.0, displacement_cents: 0, ok: false }
    }
}

/// Per-token rolling window of recent price samples.
pub struct PriceKinematicsTracker {
    window_seconds: i64,
    up: VecDeque<Sample>,
    down: VecDeque<Sample>,
}

impl PriceKinematicsTracker {
    pub fn new(window_seconds: i64) -> Self {
        Self { window_seconds, up: VecDeque::new(), down: VecDeque::new() }
    }

    fn deque_for(&mut self, token: TokenType) -> &mut VecDeque<Sample> {
        match token {
            TokenType::Up => &mut self.up,
            TokenType::Down => &mut self.down,
        }
    }

    /// Record a sample, pruning anything older than the window and
    /// enforcing `MAX_SAMPLES` even if the window itself is generous.
    pub fn add(&mut self, token: TokenType, ts_ms: i64, cents: u8) {
        let window_ms = self.window_seconds * 1000;
        let deque = self.deque_for(token);
        deque.push_back(Sample { ts_ms, cents });

        while let Some(front) = deque.front() {
            if front.ts_ms < ts_ms - window_ms {
                deque.pop_front();
            } else {
                break;
            }
        }
        while deque.len() > MAX_SAMPLES {
            deque.pop_front();
        }
    }

    /// Velocity in cents/sec over the current window, plus net displacement.
    /// `ok` is false when fewer than two samples remain in the window.
    pub fn velocity(&self, token: TokenType, now_ms: i64) -> Velocity {
        let deque = match token {
            TokenType::Up => &self.up,
            TokenType::Down => &self.down,
        };

        let window_ms = self.window_seconds * 1000;
        let in_window: Vec<&Sample> = deque.iter().filter(|s| s.ts_ms >= now_ms - window_ms).collect();
        if in_window.len() < 2 {
            return Velocity::unavailable();
        }

        let first = in_window.first().unwrap();
        let last = in_window.last().unwrap();
        let dt_secs = (last.ts_ms - first.ts_ms) as f64 / 1000.0;
        if dt_secs <= 0.0 {
            return Velocity::unavailable();
        }

        let displacement = last.cents as i64 - first.cents as i64;
        Velocity {
            velocity_cents_per_sec: displacement as f64 / dt_secs,
            displacement_cents: displacement,
            ok: true,
        }
    }

    /// True when `velocity()` clears both `min_cents_per_sec` *and*
    /// `min_move_cents` of net displacement under the given direction mode
    /// (spec §4.I step 7: "displacement >= minMoveCents AND velocity >=
    /// minVelocityCentsPerSec" — either threshold alone is not enough).
    pub fn qualifies(
        &self,
        token: TokenType,
        now_ms: i64,
        min_cents_per_sec: f64,
        min_move_cents: i64,
        mode: DirectionMode,
    ) -> bool {
        let v = self.velocity(token, now_ms);
        if !v.ok {
            return false;
        }
        if v.displacement_cents.abs() < min_move_cents {
            return false;
        }
        match mode {
            DirectionMode::Positive => v.velocity_cents_per_sec >= min_cents_per_sec,
            DirectionMode::Abs => v.velocity_cents_per_sec.abs() >= min_cents_per_sec,
        }
    }
}
