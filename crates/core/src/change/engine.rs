//! Denomination decomposition strategies.
//!
//! Both strategies uphold the same invariant: the recorded denomination
//! values sum to the input cent amount exactly (no cents lost or gained).
//!
//! - [`minimum`] - deterministic greedy decomposition using the fewest coins
//! - [`randomize`] - a valid decomposition with randomly drawn counts

use std::collections::BTreeMap;

use super::denomination::Coin;
use super::rng::RandomSource;
use super::types::ChangeResult;

/// Computes the minimum-coin decomposition of `cents`.
///
/// Iterates denominations in descending value order, taking as many of each
/// as fit. Because the penny is last, the remainder always reaches zero. For
/// the US coin set {100, 25, 10, 5, 1} the greedy result is provably the
/// fewest-coin decomposition.
///
/// # Example
///
/// ```
/// use cashtill_core::change::{Coin, engine};
///
/// let result = engine::minimum(99);
/// assert_eq!(result.denominations[&Coin::Quarter], 3);
/// assert_eq!(result.denominations[&Coin::Dime], 2);
/// assert_eq!(result.denominations[&Coin::Penny], 4);
/// assert_eq!(result.cents(), 99);
/// ```
#[must_use]
pub fn minimum(cents: u64) -> ChangeResult {
    let mut counts = BTreeMap::new();
    let mut remaining = cents;

    for coin in Coin::DESCENDING {
        let count = remaining / coin.value();
        if count > 0 {
            counts.insert(coin, count);
            remaining -= count * coin.value();
        }
    }

    ChangeResult::new(counts, cents)
}

/// Computes a randomized valid decomposition of `cents`.
///
/// For each non-penny denomination in descending order, draws a uniform
/// count in `[0, remaining / value]`; whatever is left after the draws is
/// assigned to pennies. The result always reconstructs `cents` exactly but
/// is not necessarily minimal, and repeated calls may split differently.
///
/// Callers dispatch here only for positive amounts; the zero case short
/// circuits in the selection policy.
///
/// # Example
///
/// ```
/// use cashtill_core::change::engine;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = engine::randomize(105, &mut rng);
/// assert_eq!(result.cents(), 105);
/// ```
pub fn randomize<R: RandomSource>(cents: u64, rng: &mut R) -> ChangeResult {
    let mut counts = BTreeMap::new();
    let mut remaining = cents;

    for coin in Coin::RANDOMIZED {
        let max_count = remaining / coin.value();
        if max_count > 0 {
            let count = rng.uniform_inclusive(max_count);
            if count > 0 {
                counts.insert(coin, count);
                remaining -= count * coin.value();
            }
        }
    }

    if remaining > 0 {
        counts.insert(Coin::Penny, remaining);
    }

    ChangeResult::new(counts, cents)
}
