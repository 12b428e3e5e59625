//! US currency denominations.

use serde::{Deserialize, Serialize};

/// A US currency denomination.
///
/// Declaration order is descending by value; the derived `Ord` drives both
/// greedy iteration and display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    /// Dollar coin (100 cents).
    Dollar,
    /// Quarter (25 cents).
    Quarter,
    /// Dime (10 cents).
    Dime,
    /// Nickel (5 cents).
    Nickel,
    /// Penny (1 cent).
    Penny,
}

impl Coin {
    /// All denominations in descending value order.
    pub const DESCENDING: [Self; 5] = [
        Self::Dollar,
        Self::Quarter,
        Self::Dime,
        Self::Nickel,
        Self::Penny,
    ];

    /// Denominations eligible for randomized counts (pennies absorb the
    /// remainder instead).
    pub const RANDOMIZED: [Self; 4] = [Self::Dollar, Self::Quarter, Self::Dime, Self::Nickel];

    /// Value of this denomination in cents.
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::Dollar => 100,
            Self::Quarter => 25,
            Self::Dime => 10,
            Self::Nickel => 5,
            Self::Penny => 1,
        }
    }

    /// Singular display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dollar => "dollar",
            Self::Quarter => "quarter",
            Self::Dime => "dime",
            Self::Nickel => "nickel",
            Self::Penny => "penny",
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
