//! Selection policy: validation, rounding, and strategy dispatch.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::engine;
use super::error::ChangeError;
use super::rng::RandomSource;
use super::types::{ChangeRequest, ChangeResult};

/// Divisor applied when the configured one is not usable.
pub const DEFAULT_DIVISOR: i64 = 3;

/// Process-wide change calculation policy.
///
/// Replaced wholesale through the configuration endpoint; every calculation
/// reads a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyConfig {
    /// Change amounts (in cents) divisible by this value take the randomized
    /// decomposition.
    pub random_divisor: i64,
    /// Country code; reserved extension point with no behavioral effect yet.
    pub country: String,
    /// Special-case markers; reserved extension point with no behavioral
    /// effect yet.
    pub special_cases: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            random_divisor: DEFAULT_DIVISOR,
            country: "US".to_string(),
            special_cases: Vec::new(),
        }
    }
}

/// Country-specific denomination rules.
///
/// Closed placeholder: only the standard US table exists today. The
/// `country` and `special_cases` configuration fields will select among
/// future variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum CountryRules {
    /// Standard US denomination table.
    #[default]
    Standard,
}

impl CountryRules {
    fn resolve(_country: &str, _special_cases: &[String]) -> Self {
        Self::Standard
    }
}

/// Calculates the change owed for a request under the given policy.
///
/// The change is `paid - owed` rounded to the nearest cent with Banker's
/// Rounding (`MidpointNearestEven`: ties go to the even cent). Negative
/// change fails with [`ChangeError::InvalidAmount`]; zero change returns the
/// empty result without touching the engine. Otherwise the amount in cents
/// is decomposed: amounts divisible by the configured divisor take the
/// randomized strategy, all others the greedy minimum.
///
/// A non-positive divisor is replaced by [`DEFAULT_DIVISOR`] before the
/// dispatch decision is made.
///
/// # Example
///
/// ```
/// use cashtill_core::change::{self, ChangeRequest, Coin, PolicyConfig};
/// use rand::{SeedableRng, rngs::StdRng};
/// use rust_decimal_macros::dec;
///
/// let request = ChangeRequest::new(dec!(1.00), dec!(1.99));
/// let config = PolicyConfig {
///     random_divisor: 5,
///     ..PolicyConfig::default()
/// };
/// let mut rng = StdRng::seed_from_u64(1);
///
/// // 99 cents is not divisible by 5, so the breakdown is the greedy minimum.
/// let result = change::calculate(&request, &config, &mut rng).unwrap();
/// assert_eq!(result.total, dec!(0.99));
/// assert_eq!(result.denominations[&Coin::Quarter], 3);
/// ```
pub fn calculate<R: RandomSource>(
    request: &ChangeRequest,
    config: &PolicyConfig,
    rng: &mut R,
) -> Result<ChangeResult, ChangeError> {
    let change = (request.amount_paid - request.amount_owed)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);

    if change < Decimal::ZERO {
        return Err(ChangeError::InvalidAmount);
    }

    if change.is_zero() {
        return Ok(ChangeResult::empty());
    }

    let cents = change
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|c| c.to_u64())
        .ok_or(ChangeError::AmountTooLarge)?;

    // Guard before the dispatch decision, not after.
    let divisor = if config.random_divisor <= 0 {
        DEFAULT_DIVISOR
    } else {
        config.random_divisor
    };

    let CountryRules::Standard = CountryRules::resolve(&config.country, &config.special_cases);

    if cents % divisor.unsigned_abs() == 0 {
        Ok(engine::randomize(cents, rng))
    } else {
        Ok(engine::minimum(cents))
    }
}
