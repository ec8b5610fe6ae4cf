//! Core business logic for Ratehub.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, the in-memory rate store, and the conversion
//! arithmetic live here.
//!
//! # Modules
//!
//! - `types` - The `Currency` record
//! - `store` - In-memory, lock-guarded currency store
//! - `conversion` - USD-pivot conversion arithmetic
//! - `error` - Store and conversion error types

pub mod conversion;
pub mod error;
pub mod store;
pub mod types;

pub use conversion::pivot_convert;
pub use error::{ConvertError, StoreError};
pub use store::CurrencyStore;
pub use types::Currency;

#[cfg(test)]
mod props;
