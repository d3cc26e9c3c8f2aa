//! Input validation errors.

use thiserror::Error;

/// A rejected solver input.
///
/// Every precondition is checked before any table allocation, so a solver
/// that accepts an instance never fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// `values` and `weights` describe different item counts.
    #[error("length mismatch: {values} values vs {weights} weights")]
    LengthMismatch { values: usize, weights: usize },

    /// The item set is empty.
    #[error("item set is empty")]
    NoItems,

    /// Weights must be positive integers.
    #[error("item {index} has zero weight")]
    ZeroWeight { index: usize },

    /// Values must be finite and non-negative.
    #[error("item {index} has a negative or non-finite value")]
    BadValue { index: usize },

    /// The capacity must be positive.
    #[error("capacity must be positive")]
    ZeroCapacity,
}
