//! Configuration structures for the etfrisk workspace.

use serde::{Deserialize, Serialize};

/// Configuration for the risk-metrics engine.
///
/// The price type is kept as a string so that configuration coming from
/// files surfaces the same caller-visible validation errors as direct API
/// calls; it is checked at call time, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Price field to derive returns from ("Open", "High", "Low", "Close").
    pub price_type: String,
    /// Rolling window in trading days.
    pub rolling_window_days: u32,
    /// Sampling granularity of the price data in hours.
    pub price_frequency_hours: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            price_type: "Close".to_string(),
            rolling_window_days: 8,
            price_frequency_hours: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_config() {
        let config = RiskConfig::default();
        assert_eq!(config.price_type, "Close");
        assert_eq!(config.rolling_window_days, 8);
        assert_abs_diff_eq!(config.price_frequency_hours, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "price_type": "Open",
            "rolling_window_days": 4,
            "price_frequency_hours": 6.5
        }"#;
        let config: RiskConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.price_type, "Open");
        assert_eq!(config.rolling_window_days, 4);
        assert_abs_diff_eq!(config.price_frequency_hours, 6.5, epsilon = 1e-12);
    }
}
