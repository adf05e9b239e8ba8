//! Config-driven facade over the pure metric functions.

use crate::beta::compute_rolling_beta;
use crate::correlation::compute_rolling_correlation;
use crate::volatility::compute_realized_volatility;
use etfrisk_core::{PriceBar, Result, RiskConfig, SeriesPoint, WindowSpec};

/// Risk-metric engine bound to one configuration.
///
/// Holds no state between calls; every method is a thin delegation to the
/// corresponding pure entry point, so a single engine can serve many
/// instrument pairs concurrently.
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    /// Create a new engine from configuration.
    pub fn new(config: &RiskConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// The configured window specification.
    pub fn window(&self) -> WindowSpec {
        WindowSpec::new(
            self.config.rolling_window_days,
            self.config.price_frequency_hours,
        )
    }

    /// Annualized realized-volatility series for one instrument.
    pub fn realized_volatility(&self, bars: &[PriceBar]) -> Result<Vec<SeriesPoint>> {
        compute_realized_volatility(
            bars,
            &self.config.price_type,
            self.config.rolling_window_days,
            self.config.price_frequency_hours,
        )
    }

    /// Rolling beta of a target instrument against a benchmark.
    pub fn rolling_beta(
        &self,
        target: &[PriceBar],
        benchmark: &[PriceBar],
    ) -> Result<Vec<SeriesPoint>> {
        compute_rolling_beta(
            target,
            benchmark,
            &self.config.price_type,
            self.config.rolling_window_days,
            self.config.price_frequency_hours,
        )
    }

    /// Rolling correlation between two realized-volatility series.
    pub fn rolling_correlation(
        &self,
        target: &[PriceBar],
        benchmark: &[PriceBar],
    ) -> Result<Vec<SeriesPoint>> {
        compute_rolling_correlation(
            target,
            benchmark,
            &self.config.price_type,
            self.config.rolling_window_days,
            self.config.price_frequency_hours,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etfrisk_core::TimestampMs;

    const HOUR_MS: TimestampMs = 3_600_000;

    fn hourly_bars(prices: &[f64]) -> Vec<PriceBar> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PriceBar {
                ts_ms: i as TimestampMs * HOUR_MS,
                open: p,
                high: p * 1.001,
                low: p * 0.999,
                close: p,
            })
            .collect()
    }

    fn wavy_prices(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 3.0 * (i as f64 * 0.7).sin() + 0.05 * i as f64)
            .collect()
    }

    #[test]
    fn test_engine_matches_direct_calls() {
        let config = RiskConfig::default();
        let engine = RiskEngine::new(&config);
        let bars = hourly_bars(&wavy_prices(80));

        let via_engine = engine.realized_volatility(&bars).unwrap();
        let direct = compute_realized_volatility(&bars, "Close", 8, 1.0).unwrap();
        assert_eq!(via_engine, direct);

        let via_engine = engine.rolling_beta(&bars, &bars).unwrap();
        let direct = compute_rolling_beta(&bars, &bars, "Close", 8, 1.0).unwrap();
        assert_eq!(via_engine, direct);
    }

    #[test]
    fn test_engine_window() {
        let engine = RiskEngine::new(&RiskConfig::default());
        assert_eq!(engine.window().len(), 48);
    }

    #[test]
    fn test_invalid_config_surfaces_at_call_time() {
        let config = RiskConfig {
            price_type: "AdjClose".to_string(),
            ..RiskConfig::default()
        };
        let engine = RiskEngine::new(&config);
        let bars = hourly_bars(&wavy_prices(80));

        let err = engine.realized_volatility(&bars).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Price Type! Cannot Calculate Realized Volatilities"
        );
        let err = engine.rolling_beta(&bars, &bars).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Price Type! Cannot Calculate Rolling Betas");
    }
}
