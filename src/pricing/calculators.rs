//! Core pricing calculation functions.
//!
//! Pure functions for tariff math - no carrier branching here. The
//! per-carrier billing rules live in `plans`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::DeviceCounts;
use super::tariffs;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tvnet_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Internet lines needed for a TV count: one line per group of up to 8
/// TVs, partial groups rounded up. Zero for non-positive counts.
pub fn line_count(tv_count: i32) -> i32 {
    if tv_count <= 0 {
        return 0;
    }
    (tv_count + tariffs::TVS_PER_LINE - 1) / tariffs::TVS_PER_LINE
}

/// Split a TV count into line/main/sub device counts.
///
/// One device per line is "main"; the remainder are "sub". Only KT bills
/// the split, but the counts themselves are carrier-independent.
pub fn device_counts(tv_count: i32) -> DeviceCounts {
    let lines = line_count(tv_count);
    DeviceCounts {
        tv_count: tv_count.max(0),
        line_count: lines,
        main_count: lines,
        sub_count: (tv_count - lines).max(0),
    }
}

/// VAT-inclusive total: 10% on the subtotal, truncated to whole KRW
/// (never rounded up).
pub fn with_vat(subtotal: Decimal) -> Decimal {
    (subtotal * tariffs::VAT_MULTIPLIER).floor()
}

/// Per-TV display figure, rounded to whole KRW. Zero when there are no
/// TVs; the page only shows this for positive counts.
pub fn per_tv(amount: Decimal, tv_count: i32) -> Decimal {
    if tv_count <= 0 {
        return Decimal::ZERO;
    }
    round_money(amount / Decimal::from(tv_count), 0)
}
