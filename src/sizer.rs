//! Component C: minimum-order-size adjuster (spec §4.C) — another
//! deterministic pure function grounded on the teacher's `engine/decision.rs`
//! sizing guards (reject non-finite inputs, clamp up to an exchange minimum
//! before placing).

/// `AdjustSizeForMinOrderUSDC` result (spec §4.C): `size` is the share count
/// the caller should actually place. `ratio` is `requiredSize / origSize`
/// whenever an adjustment was considered (1.0 on the pass-through path).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeAdjustment {
    pub size: u64,
    pub skipped: bool,
    pub adjusted: bool,
    pub ratio: f64,
    pub orig_amount: f64,
    pub new_amount: f64,
}

/// `AdjustSizeForMinOrderUSDC(size, price, minUSDC, autoAdjust,
/// maxAdjustRatio)`.
///
/// Pass-through if `size * price >= minUSDC`. Otherwise, if `!autoAdjust`,
/// the caller is told to skip the order rather than silently resize it.
/// Otherwise the size required to clear `minUSDC` is computed and capped by
/// `maxAdjustRatio` (a multiple of the *original* size, not an absolute
/// notional) — skip rather than blow the position up past what the caller
/// asked to risk. `maxAdjustRatio <= 0` means no cap.
pub fn adjust_size_for_min_order_usdc(
    size: u64,
    price_cents: u8,
    min_usdc: f64,
    auto_adjust: bool,
    max_adjust_ratio: f64,
) -> Option<SizeAdjustment> {
    if !min_usdc.is_finite() || !max_adjust_ratio.is_finite() {
        return None;
    }
    if price_cents == 0 {
        return None;
    }

    let unit_usdc = price_cents as f64 / 100.0;
    let orig_amount = unit_usdc * size as f64;

    if orig_amount >= min_usdc {
        return Some(SizeAdjustment {
            size,
            skipped: false,
            adjusted: false,
            ratio: 1.0,
            orig_amount,
            new_amount: orig_amount,
        });
    }

    if !auto_adjust {
        return Some(SizeAdjustment {
            size,
            skipped: true,
            adjusted: false,
            ratio: 1.0,
            orig_amount,
            new_amount: orig_amount,
        });
    }

    let required = min_usdc / unit_usdc;
    let ratio = if size > 0 { required / size as f64 } else { f64::INFINITY };
    if max_adjust_ratio > 0.0 && ratio > max_adjust_ratio {
        return Some(SizeAdjustment {
            size,
            skipped: true,
            adjusted: false,
            ratio,
            orig_amount,
            new_amount: orig_amount,
        });
    }

    // Round up to the nearest whole share; if float drift still leaves the
    // notional a hair under min_usdc, widen by another 1% and round again.
    let mut new_size = required.ceil() as u64;
    if unit_usdc * new_size as f64 < min_usdc {
        new_size = (required * 1.01).ceil() as u64;
    }
    let new_amount = unit_usdc * new_size as f64;

    Some(SizeAdjustment { size: new_size, skipped: false, adjusted: true, ratio, orig_amount, new_amount })
}
