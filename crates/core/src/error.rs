//! Error types for store and conversion operations.

use thiserror::Error;

/// Errors from code-keyed store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given code exists.
    #[error("currency '{0}' not found")]
    NotFound(String),
}

/// Errors from currency conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The code is absent from the store, or is stored with a rate of
    /// exactly zero. The two cases are deliberately indistinguishable:
    /// a zero rate can never participate in a pivot conversion.
    #[error("unknown or zero-rate currency '{0}'")]
    UnknownCurrency(String),
}
