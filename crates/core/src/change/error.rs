//! Change calculation error types.

use thiserror::Error;

/// Change calculation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// Amount paid is less than the amount owed.
    #[error("amount paid must be greater than or equal to amount owed")]
    InvalidAmount,

    /// Change amount exceeds the representable cent range.
    #[error("change amount exceeds the supported range")]
    AmountTooLarge,
}
