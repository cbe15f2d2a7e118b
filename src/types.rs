//! Core value types shared across every component.
//!
//! Prices move in integer *pips*; 1 cent = 100 pips (spec §3). Everything
//! that compares or sums prices for trading decisions does so in cents —
//! pips only exist so a collaborator can report sub-cent book levels
//! without the core losing precision when it rounds down to cents.

/// 1 cent = 100 pips.
pub const PIPS_PER_CENT: i64 = 100;

/// Integer price in pips. Always non-negative in practice; the exchange's
/// [1,99]-cent convention means valid `Price` values sit in
/// `[0, 100 * PIPS_PER_CENT]`, but we don't enforce that at construction
/// since book feeds can transiently report out-of-range pips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(pub i64);

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Price(cents * PIPS_PER_CENT)
    }

    /// Round to the nearest cent, bounds-clamped to [0, 100].
    pub fn to_cents(self) -> u8 {
        let rounded = (self.0 as f64 / PIPS_PER_CENT as f64).round() as i64;
        rounded.clamp(0, 100) as u8
    }
}

/// A market's two mutually exclusive outcome tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Up,
    Down,
}

impl TokenType {
    pub fn opposite(self) -> TokenType {
        match self {
            TokenType::Up => TokenType::Down,
            TokenType::Down => TokenType::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Up => "up",
            TokenType::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tif {
    /// Good-Till-Canceled: rests on the book until filled or canceled.
    Gtc,
    /// Fill-And-Kill: execute against the current book, cancel the remainder.
    Fak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Open,
    Partial,
    Filled,
    Canceled,
    Failed,
}

impl OrderStatus {
    /// Terminal statuses are monotone (spec §3 Order invariants): once set,
    /// an order never leaves this set.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Filled | OrderStatus::Canceled | OrderStatus::Failed
        )
    }

    pub fn is_active(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Open | OrderStatus::Partial)
    }
}
