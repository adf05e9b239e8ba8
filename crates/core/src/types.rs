//! Core data types for the etfrisk workspace.

use crate::error::{Error, MetricFamily, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp in milliseconds since Unix epoch (UTC).
pub type TimestampMs = i64;

/// Trading hours in one US equity session.
pub const TRADING_HOURS_PER_DAY: f64 = 6.5;

/// Trading days in one year, used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Price field of an OHLC observation.
///
/// Closed enumeration replacing a runtime string-membership check; string
/// input is still accepted at the API boundary via [`PriceField::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

impl PriceField {
    /// Parse a field name, yielding the family-specific error for anything
    /// outside Open/High/Low/Close.
    pub fn parse(name: &str, family: MetricFamily) -> Result<Self> {
        match name {
            "Open" => Ok(PriceField::Open),
            "High" => Ok(PriceField::High),
            "Low" => Ok(PriceField::Low),
            "Close" => Ok(PriceField::Close),
            _ => Err(Error::InvalidPriceType(family)),
        }
    }

    /// Canonical field name.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
        }
    }
}

/// One OHLC price observation.
///
/// Fields may be NaN when the upstream feed had a gap; such rows are dropped
/// before return derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    /// Observation timestamp in milliseconds.
    pub ts_ms: TimestampMs,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
}

impl PriceBar {
    /// Get the requested price field.
    #[inline]
    pub fn field(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
        }
    }

    /// Whether any price field is missing (NaN).
    #[inline]
    pub fn has_missing(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Timestamp as a UTC datetime, if representable.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.ts_ms).single()
    }
}

/// One sample of a derived time series (returns, volatility, beta, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Sample timestamp in milliseconds.
    pub ts_ms: TimestampMs,
    /// Sample value.
    pub value: f64,
}

impl SeriesPoint {
    /// Create a new sample.
    #[inline]
    pub fn new(ts_ms: TimestampMs, value: f64) -> Self {
        Self { ts_ms, value }
    }
}

/// Rolling window specification in trading days at a given sampling frequency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Rolling window length in trading days.
    pub rolling_window_days: u32,
    /// Sampling granularity of the price data in hours.
    pub price_frequency_hours: f64,
}

impl WindowSpec {
    /// Create a new window specification.
    pub fn new(rolling_window_days: u32, price_frequency_hours: f64) -> Self {
        Self {
            rolling_window_days,
            price_frequency_hours,
        }
    }

    /// Observations per trading day: `round(6.5 / frequency)`.
    ///
    /// Ties round to even: hourly data gives a scalar of 6, not 7.
    pub fn scalar(&self) -> usize {
        let per_day = TRADING_HOURS_PER_DAY / self.price_frequency_hours;
        per_day.round_ties_even() as usize
    }

    /// Window length in observations.
    pub fn len(&self) -> usize {
        (self.rolling_window_days as usize).saturating_mul(self.scalar())
    }

    /// Whether the window is degenerate (zero observations).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Factor converting per-observation variance to annualized variance.
    pub fn annualization(&self) -> f64 {
        TRADING_DAYS_PER_YEAR * self.scalar() as f64
    }

    /// Check the window against the available observation count.
    ///
    /// Runs before any numeric work; the raw row count is used, since NaN
    /// rows are only dropped afterwards.
    pub fn validate_fits(&self, available: usize, family: MetricFamily) -> Result<usize> {
        let window = self.len();
        if window > available {
            return Err(Error::WindowTooLarge(family));
        }
        Ok(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_price_field_parse_roundtrip() {
        for name in ["Open", "High", "Low", "Close"] {
            let field = PriceField::parse(name, MetricFamily::RealizedVolatility).unwrap();
            assert_eq!(field.as_str(), name);
        }
    }

    #[test]
    fn test_price_field_parse_rejects_unknown() {
        let err = PriceField::parse("NONE", MetricFamily::RealizedVolatility).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Price Type! Cannot Calculate Realized Volatilities"
        );

        let err = PriceField::parse("close", MetricFamily::RollingBeta).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Price Type! Cannot Calculate Rolling Betas");
    }

    #[test]
    fn test_window_scalar_rounds_ties_to_even() {
        // 6.5 / 1.0 = 6.5 -> 6 (not 7)
        assert_eq!(WindowSpec::new(1, 1.0).scalar(), 6);
        // 6.5 / 2.0 = 3.25 -> 3
        assert_eq!(WindowSpec::new(1, 2.0).scalar(), 3);
        // 6.5 / 6.5 = 1.0 -> 1
        assert_eq!(WindowSpec::new(1, 6.5).scalar(), 1);
        // 6.5 / 13.0 = 0.5 -> 0
        assert_eq!(WindowSpec::new(1, 13.0).scalar(), 0);
    }

    #[test]
    fn test_window_len() {
        assert_eq!(WindowSpec::new(8, 1.0).len(), 48);
        assert_eq!(WindowSpec::new(4, 1.0).len(), 24);
        assert_eq!(WindowSpec::new(5, 6.5).len(), 5);
    }

    #[test]
    fn test_window_annualization() {
        // Hourly data: 252 * 6
        let spec = WindowSpec::new(8, 1.0);
        assert_abs_diff_eq!(spec.annualization(), 1512.0, epsilon = 1e-12);
    }

    #[test]
    fn test_window_validate_fits() {
        let spec = WindowSpec::new(8, 1.0);
        assert_eq!(spec.validate_fits(48, MetricFamily::RealizedVolatility).unwrap(), 48);
        assert_eq!(spec.validate_fits(100, MetricFamily::RollingBeta).unwrap(), 48);

        let err = spec.validate_fits(47, MetricFamily::RealizedVolatility).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot Compute Valid Rolling Realized Volatilities as the Window is too Large!"
        );

        let err = spec.validate_fits(47, MetricFamily::RollingBeta).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot Compute Valid Rolling Betas as the Window is too Large!"
        );
    }

    #[test]
    fn test_bar_field_and_missing() {
        let bar = PriceBar {
            ts_ms: 0,
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
        };
        assert_eq!(bar.field(PriceField::Open), 1.0);
        assert_eq!(bar.field(PriceField::High), 2.0);
        assert_eq!(bar.field(PriceField::Low), 0.5);
        assert_eq!(bar.field(PriceField::Close), 1.5);
        assert!(!bar.has_missing());

        let gapped = PriceBar { low: f64::NAN, ..bar };
        assert!(gapped.has_missing());
    }

    #[test]
    fn test_bar_datetime() {
        let bar = PriceBar {
            ts_ms: 1704067200000, // 2024-01-01 00:00:00 UTC
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
        };
        let dt = bar.datetime().unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }
}
