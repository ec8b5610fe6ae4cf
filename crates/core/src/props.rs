//! Property-based tests for store and conversion operations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::conversion::pivot_convert;
use crate::store::CurrencyStore;
use crate::types::Currency;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate short uppercase currency codes.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount and rate, converting a currency to itself SHALL
    /// return the amount (up to the 4-decimal rounding of the result).
    #[test]
    fn prop_self_conversion_is_identity(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = pivot_convert(amount, rate, rate);
        prop_assert_eq!(result, amount.round_dp(4));
    }

    /// *For any* inputs, the result SHALL have at most 4 decimal places.
    #[test]
    fn prop_result_rounds_to_4_decimals(
        amount in positive_amount(),
        from_rate in positive_rate(),
        to_rate in positive_rate(),
    ) {
        let result = pivot_convert(amount, from_rate, to_rate);
        let scaled = result * Decimal::from(10000);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "Result {} should have at most 4 decimal places",
            result
        );
    }

    /// *For any* inputs, conversion SHALL be deterministic.
    #[test]
    fn prop_conversion_is_deterministic(
        amount in positive_amount(),
        from_rate in positive_rate(),
        to_rate in positive_rate(),
    ) {
        let first = pivot_convert(amount, from_rate, to_rate);
        let second = pivot_convert(amount, from_rate, to_rate);
        prop_assert_eq!(first, second);
    }

    /// *For any* sequence of adds, list SHALL return exactly those records
    /// in insertion order.
    #[test]
    fn prop_list_preserves_insertion_order(
        entries in prop::collection::vec((currency_code(), positive_rate()), 0..20),
    ) {
        let store = CurrencyStore::new();
        for (code, rate) in &entries {
            store.add(Currency::new(code.clone(), *rate));
        }

        let listed: Vec<(String, Decimal)> = store
            .list()
            .into_iter()
            .map(|c| (c.code, c.rate))
            .collect();
        prop_assert_eq!(listed, entries);
    }
}
