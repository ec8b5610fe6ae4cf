//! Domain types for the rate store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored currency record.
///
/// `rate` is expressed as *units of this currency per 1 USD*: dividing an
/// amount by its currency's rate yields USD, multiplying a USD amount by a
/// rate yields that currency. USD itself is stored with rate 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency code (e.g. "USD", "EUR"). Acts as the lookup key; no
    /// uniqueness is enforced, first match wins.
    pub code: String,
    /// Units of this currency per 1 USD, as a JSON number on the wire.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

impl Currency {
    /// Creates a new currency record.
    #[must_use]
    pub const fn new(code: String, rate: Decimal) -> Self {
        Self { code, rate }
    }
}
