//! Change calculation request and result types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::denomination::Coin;

/// Input for a single change calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    /// Amount the customer owes.
    pub amount_owed: Decimal,
    /// Amount the customer paid.
    pub amount_paid: Decimal,
}

impl ChangeRequest {
    /// Creates a new change request.
    #[must_use]
    pub const fn new(amount_owed: Decimal, amount_paid: Decimal) -> Self {
        Self {
            amount_owed,
            amount_paid,
        }
    }
}

/// Breakdown of change by denomination.
///
/// Invariant: `total` in cents equals `sum(count * value)` over the recorded
/// denominations exactly. Zero counts are never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeResult {
    /// Count per denomination; ordered descending by value.
    pub denominations: BTreeMap<Coin, u64>,
    /// Total change as a decimal currency amount.
    pub total: Decimal,
}

impl ChangeResult {
    /// Builds a result from denomination counts and the cent amount they
    /// reconstruct.
    #[must_use]
    pub fn new(denominations: BTreeMap<Coin, u64>, cents: u64) -> Self {
        Self {
            denominations,
            total: Decimal::from(cents) / Decimal::ONE_HUNDRED,
        }
    }

    /// The empty result: no denominations, zero total.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            denominations: BTreeMap::new(),
            total: Decimal::ZERO,
        }
    }

    /// Total value of the recorded denominations in cents.
    #[must_use]
    pub fn cents(&self) -> u64 {
        self.denominations
            .iter()
            .map(|(coin, count)| coin.value() * count)
            .sum()
    }
}
