//! Property-based tests for change calculation.
//!
//! - Reconstruction: both engines rebuild their input cent amount exactly
//! - Determinism: the greedy engine is a pure function of its input
//! - Routing: divisibility alone decides which engine runs

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

use super::engine::{minimum, randomize};
use super::policy::{PolicyConfig, calculate};
use super::rng::RandomSource;
use super::types::ChangeRequest;

/// Strategy for cent amounts within everyday register range.
fn cents() -> impl Strategy<Value = u64> {
    0u64..1_000_000
}

/// Strategy for strictly positive cent amounts.
fn positive_cents() -> impl Strategy<Value = u64> {
    1u64..1_000_000
}

/// Source that counts draws so properties can observe which engine ran.
struct DrawProbe {
    inner: StdRng,
    draws: usize,
}

impl RandomSource for DrawProbe {
    fn uniform_inclusive(&mut self, max: u64) -> u64 {
        self.draws += 1;
        self.inner.uniform_inclusive(max)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// minimum() reconstructs its input exactly.
    #[test]
    fn prop_minimum_reconstructs(cents in cents()) {
        prop_assert_eq!(minimum(cents).cents(), cents);
    }

    /// minimum() is deterministic.
    #[test]
    fn prop_minimum_deterministic(cents in cents()) {
        prop_assert_eq!(minimum(cents), minimum(cents));
    }

    /// minimum() never records a zero count.
    #[test]
    fn prop_minimum_counts_positive(cents in cents()) {
        prop_assert!(minimum(cents).denominations.values().all(|&c| c > 0));
    }

    /// randomize() reconstructs its input exactly, whatever the seed.
    #[test]
    fn prop_randomize_reconstructs(cents in positive_cents(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(randomize(cents, &mut rng).cents(), cents);
    }

    /// randomize() never records a zero count.
    #[test]
    fn prop_randomize_counts_positive(cents in positive_cents(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(randomize(cents, &mut rng).denominations.values().all(|&c| c > 0));
    }

    /// randomize() never uses fewer coins than the provably minimal greedy
    /// breakdown.
    #[test]
    fn prop_randomize_at_least_minimal(cents in positive_cents(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let randomized: u64 = randomize(cents, &mut rng).denominations.values().sum();
        let minimal: u64 = minimum(cents).denominations.values().sum();
        prop_assert!(randomized >= minimal);
    }

    /// calculate() conserves the rounded difference between paid and owed.
    #[test]
    fn prop_calculate_total_is_change(
        owed in 0i64..1_000_000,
        change in 0i64..1_000_000,
        seed in any::<u64>(),
    ) {
        let request = ChangeRequest::new(
            Decimal::new(owed, 2),
            Decimal::new(owed + change, 2),
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let result = calculate(&request, &PolicyConfig::default(), &mut rng).unwrap();
        prop_assert_eq!(result.total, Decimal::new(change, 2));
        prop_assert_eq!(result.cents(), u64::try_from(change).unwrap());
    }

    /// calculate() rejects any payment at least a cent short.
    #[test]
    fn prop_calculate_rejects_underpayment(
        (owed, short) in (1i64..1_000_000).prop_flat_map(|owed| (Just(owed), 1i64..=owed)),
    ) {
        let request = ChangeRequest::new(
            Decimal::new(owed, 2),
            Decimal::new(owed - short, 2),
        );
        let mut rng = StdRng::seed_from_u64(0);
        let result = calculate(&request, &PolicyConfig::default(), &mut rng);
        prop_assert!(result.is_err());
    }

    /// Divisibility alone routes between the engines. Amounts below a nickel
    /// never draw because no randomizable denomination fits.
    #[test]
    fn prop_routing_follows_divisibility(
        change in 1i64..1_000_000,
        divisor in 1i64..100,
    ) {
        let request = ChangeRequest::new(Decimal::ZERO, Decimal::new(change, 2));
        let config = PolicyConfig {
            random_divisor: divisor,
            ..PolicyConfig::default()
        };
        let mut probe = DrawProbe { inner: StdRng::seed_from_u64(0), draws: 0 };

        let result = calculate(&request, &config, &mut probe).unwrap();
        prop_assert_eq!(result.cents(), u64::try_from(change).unwrap());

        let expect_draws = change % divisor == 0 && change >= 5;
        prop_assert_eq!(probe.draws > 0, expect_draws);
    }
}
