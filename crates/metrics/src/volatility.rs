//! Rolling realized volatility.
//!
//! Annualized square root of the trailing mean of squared log returns.

use crate::returns::log_returns;
use etfrisk_core::{MetricFamily, PriceBar, PriceField, Result, SeriesPoint, WindowSpec};
use tracing::debug;

/// Compute an annualized realized-volatility series from price bars.
///
/// The price type is validated first, then the window is checked against the
/// raw row count; both failures surface before any numeric work. Bars with
/// missing fields are dropped before return derivation.
pub fn compute_realized_volatility(
    bars: &[PriceBar],
    price_type: &str,
    rolling_window_days: u32,
    price_frequency_hours: f64,
) -> Result<Vec<SeriesPoint>> {
    let family = MetricFamily::RealizedVolatility;
    let field = PriceField::parse(price_type, family)?;
    let spec = WindowSpec::new(rolling_window_days, price_frequency_hours);
    let window = spec.validate_fits(bars.len(), family)?;

    debug!(
        window,
        scalar = spec.scalar(),
        rows = bars.len(),
        field = field.as_str(),
        "computing realized volatility"
    );

    let returns = log_returns(bars, field);
    Ok(rolling_realized_volatility(&returns, window, spec.annualization()))
}

/// Trailing rolling volatility over a log-return series.
///
/// For each position with a full `window` of history, the trailing mean of
/// squared returns is scaled by the annualization factor and square-rooted.
/// Each output is labeled at its window's last timestamp; warm-up positions
/// emit nothing. A NaN return (negative price upstream) drops every window
/// containing it, while an infinite return (zero price upstream) propagates
/// an infinite volatility for those windows. Runs in O(n) with a running
/// sum of squares kept clear of non-finite values.
pub fn rolling_realized_volatility(
    returns: &[SeriesPoint],
    window: usize,
    annualization: f64,
) -> Vec<SeriesPoint> {
    if window == 0 || returns.len() < window {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(returns.len() - window + 1);
    let mut sum_sq = 0.0;
    let mut nan_in_window = 0usize;
    let mut inf_in_window = 0usize;

    for (i, point) in returns.iter().enumerate() {
        if point.value.is_finite() {
            sum_sq += point.value * point.value;
        } else if point.value.is_nan() {
            nan_in_window += 1;
        } else {
            inf_in_window += 1;
        }
        if i >= window {
            let old = returns[i - window].value;
            if old.is_finite() {
                sum_sq -= old * old;
            } else if old.is_nan() {
                nan_in_window -= 1;
            } else {
                inf_in_window -= 1;
            }
        }
        if i + 1 < window || nan_in_window > 0 {
            continue;
        }
        if inf_in_window > 0 {
            // A squared infinite return dominates the window mean.
            out.push(SeriesPoint::new(point.ts_ms, f64::INFINITY));
        } else {
            // Running subtraction can leave a tiny negative residue.
            let variance = (annualization * sum_sq / window as f64).max(0.0);
            out.push(SeriesPoint::new(point.ts_ms, variance.sqrt()));
        }
    }
    out
}
