//! Rolling risk metrics for exchange-traded instruments.
//!
//! This crate handles:
//! - Log-return derivation from OHLC price series
//! - Trailing annualized realized volatility
//! - Rolling OLS beta against a benchmark
//! - Rolling correlation of two realized-volatility series
//! - Timestamp alignment of derived series
//!
//! All entry points are pure batch transforms: they never mutate their
//! inputs and hold no state across calls.

pub mod align;
pub mod beta;
pub mod correlation;
pub mod engine;
pub mod returns;
pub mod volatility;

pub use align::{inner_join, AlignedPoint};
pub use beta::{compute_rolling_beta, rolling_beta};
pub use correlation::{compute_rolling_correlation, rolling_correlation};
pub use engine::RiskEngine;
pub use returns::log_returns;
pub use volatility::{compute_realized_volatility, rolling_realized_volatility};
