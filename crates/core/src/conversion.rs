//! USD-pivot conversion arithmetic.
//!
//! CRITICAL: Rounding strategy:
//! - Always round results to 4 decimal places
//! - Use banker's rounding (round half to even)

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Number of decimal places conversion results are rounded to.
pub const RESULT_DECIMAL_PLACES: u32 = 4;

/// Converts `amount` from one currency to another via USD.
///
/// Rates are *units of currency per 1 USD*, so `amount / from_rate` is the
/// USD value and multiplying by `to_rate` lands in the target currency.
/// `from_rate` must be non-zero; callers reject zero rates before this.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn pivot_convert(amount: Decimal, from_rate: Decimal, to_rate: Decimal) -> Decimal {
    let converted = (amount / from_rate) * to_rate;
    converted.round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}
