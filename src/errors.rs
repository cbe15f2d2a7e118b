//! Error kinds and policy (spec §7).
//!
//! Shaped like the vendored `kalshi-rs` error enum (closed `enum` +
//! `Display` + `std::error::Error`), but scoped to the policies the core
//! itself needs to reason about — no exceptions cross component
//! boundaries, everything is an explicit `Result`.

use std::fmt;

/// What a component should do after encountering a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log, abort the current action, arm the short `cooldownMs` cooldown.
    AbortWithShortCooldown,
    /// Drop silently; does not count as an event, no cooldown.
    DropNoCooldown,
    /// Hard-reset the paired trade and arm a long cooldown.
    HardResetLongCooldown,
    /// Emit a `failed` status and leave funds locked for a future retry.
    EmitFailedKeepLocked,
    /// Refuse the action outright; mark the exposure triggered; never retry.
    RefuseNoRetry,
    /// Stop repricing; fall through to the next escalation tier if any.
    StopAndFallThrough,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Top-of-book read, order placement, or cancellation exceeded its
    /// deadline or the collaborator returned a transport-level failure.
    TransientNetwork(String),
    /// The exchange rejected an order outright (not a timeout).
    OrderRejected(String),
    /// A precheck caught an out-of-bounds price, a size below the
    /// exchange minimum, or a pair cost that would exceed 100 cents.
    PrecheckViolation(String),
    /// An internal invariant was violated: missing market identity, missing
    /// asset ids, or similar "this should never happen" states.
    InvariantViolation(String),
    /// The relayer rejected or failed to process a merge submission.
    MergeSubmissionFailed(String),
    /// Expected loss on an aggressive hedge exceeded 2x the acceptable cap.
    AggressiveHedgeTooExpensive { expected_loss_cents: i64, cap_cents: i64 },
    /// `maxReorderAttempts` was reached without a fill.
    ReorderExhausted { attempts: u32 },
    /// The price-stop monitor's unrealized loss exceeded `maxAcceptableLossCents`;
    /// the hedge is left alone and a short risk-off window is triggered instead.
    PriceStopRefused { loss_cents: i64, cap_cents: i64 },
}

impl CoreError {
    pub fn policy(&self) -> ErrorPolicy {
        match self {
            CoreError::TransientNetwork(_) => ErrorPolicy::AbortWithShortCooldown,
            CoreError::OrderRejected(_) => ErrorPolicy::AbortWithShortCooldown,
            CoreError::PrecheckViolation(_) => ErrorPolicy::DropNoCooldown,
            CoreError::InvariantViolation(_) => ErrorPolicy::HardResetLongCooldown,
            CoreError::MergeSubmissionFailed(_) => ErrorPolicy::EmitFailedKeepLocked,
            CoreError::AggressiveHedgeTooExpensive { .. } => ErrorPolicy::RefuseNoRetry,
            CoreError::ReorderExhausted { .. } => ErrorPolicy::StopAndFallThrough,
            CoreError::PriceStopRefused { .. } => ErrorPolicy::RefuseNoRetry,
        }
    }

    /// Matches spec §7's log-level column: INFO happy path, WARN
    /// recoverable, ERROR refusal/safety-net trip.
    pub fn log_level(&self) -> tracing::Level {
        match self.policy() {
            ErrorPolicy::DropNoCooldown => tracing::Level::INFO,
            ErrorPolicy::AbortWithShortCooldown
            | ErrorPolicy::EmitFailedKeepLocked
            | ErrorPolicy::StopAndFallThrough => tracing::Level::WARN,
            ErrorPolicy::HardResetLongCooldown | ErrorPolicy::RefuseNoRetry => {
                tracing::Level::ERROR
            }
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::TransientNetwork(msg) => write!(f, "transient network error: {msg}"),
            CoreError::OrderRejected(msg) => write!(f, "order rejected: {msg}"),
            CoreError::PrecheckViolation(msg) => write!(f, "precheck violation: {msg}"),
            CoreError::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            CoreError::MergeSubmissionFailed(msg) => write!(f, "merge submission failed: {msg}"),
            CoreError::AggressiveHedgeTooExpensive { expected_loss_cents, cap_cents } => write!(
                f,
                "aggressive hedge too expensive: expected loss {expected_loss_cents}c > 2x cap {cap_cents}c"
            ),
            CoreError::ReorderExhausted { attempts } => {
                write!(f, "reorder exhausted after {attempts} attempts")
            }
            CoreError::PriceStopRefused { loss_cents, cap_cents } => write!(
                f,
                "price stop refused: unrealized loss {loss_cents}c exceeds cap {cap_cents}c"
            ),
        }
    }
}

impl std::error::Error for CoreError {}
