//! Error types for the etfrisk workspace.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Metric family that raised a validation error.
///
/// The caller-visible wording differs between the realized-volatility /
/// correlation path and the rolling-beta path; downstream tooling matches on
/// the exact message text, so the split is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFamily {
    /// Realized volatility and rolling realized correlation.
    RealizedVolatility,
    /// Rolling beta against a benchmark.
    RollingBeta,
}

impl MetricFamily {
    /// Label used in `InvalidPriceType` messages.
    fn price_type_label(self) -> &'static str {
        match self {
            MetricFamily::RealizedVolatility => "Realized Volatilities",
            MetricFamily::RollingBeta => "Rolling Betas",
        }
    }

    /// Label used in `WindowTooLarge` messages.
    fn window_label(self) -> &'static str {
        match self {
            MetricFamily::RealizedVolatility => "Rolling Realized Volatilities",
            MetricFamily::RollingBeta => "Rolling Betas",
        }
    }
}

/// Validation errors raised before any numeric work starts.
///
/// No partial series is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested price field is not one of Open/High/Low/Close.
    #[error("Invalid Price Type! Cannot Calculate {}", .0.price_type_label())]
    InvalidPriceType(MetricFamily),

    /// Requested rolling window exceeds the available observations.
    #[error("Cannot Compute Valid {} as the Window is too Large!", .0.window_label())]
    WindowTooLarge(MetricFamily),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_price_type_messages() {
        assert_eq!(
            Error::InvalidPriceType(MetricFamily::RealizedVolatility).to_string(),
            "Invalid Price Type! Cannot Calculate Realized Volatilities"
        );
        assert_eq!(
            Error::InvalidPriceType(MetricFamily::RollingBeta).to_string(),
            "Invalid Price Type! Cannot Calculate Rolling Betas"
        );
    }

    #[test]
    fn test_window_too_large_messages() {
        assert_eq!(
            Error::WindowTooLarge(MetricFamily::RealizedVolatility).to_string(),
            "Cannot Compute Valid Rolling Realized Volatilities as the Window is too Large!"
        );
        assert_eq!(
            Error::WindowTooLarge(MetricFamily::RollingBeta).to_string(),
            "Cannot Compute Valid Rolling Betas as the Window is too Large!"
        );
    }
}
