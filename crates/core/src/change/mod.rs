//! Change calculation: decomposition engine and selection policy.

pub mod denomination;
pub mod engine;
pub mod error;
pub mod format;
pub mod policy;
pub mod rng;
pub mod types;

#[cfg(test)]
mod props;

pub use denomination::Coin;
pub use engine::{minimum, randomize};
pub use error::ChangeError;
pub use format::format_result;
pub use policy::{DEFAULT_DIVISOR, PolicyConfig, calculate};
pub use rng::RandomSource;
pub use types::{ChangeRequest, ChangeResult};
