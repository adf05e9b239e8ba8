//! Log-return derivation from OHLC price series.

use etfrisk_core::{PriceBar, PriceField, SeriesPoint, TimestampMs};
use tracing::warn;

/// Compute single-period log returns for one price field.
///
/// Bars with any missing (NaN) price field are dropped first, then
/// `r_t = ln(p_t / p_{t-1})` for each remaining consecutive pair. Each return
/// is labeled at the later timestamp, so the output has one entry fewer than
/// the cleaned input. The caller's bars are never modified.
///
/// Non-positive prices are not rejected here; they propagate non-finite
/// returns, matching the upstream data contract that prices are positive.
pub fn log_returns(bars: &[PriceBar], field: PriceField) -> Vec<SeriesPoint> {
    let clean: Vec<(TimestampMs, f64)> = bars
        .iter()
        .filter(|bar| !bar.has_missing())
        .map(|bar| (bar.ts_ms, bar.field(field)))
        .collect();

    let non_positive = clean.iter().filter(|(_, price)| *price <= 0.0).count();
    if non_positive > 0 {
        warn!(
            non_positive,
            field = field.as_str(),
            "non-positive prices yield non-finite log returns"
        );
    }

    clean
        .windows(2)
        .map(|pair| SeriesPoint::new(pair[1].0, (pair[1].1 / pair[0].1).ln()))
        .collect()
}
