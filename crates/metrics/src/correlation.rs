//! Rolling correlation of realized-volatility series.
//!
//! Composes two realized-volatility computations and correlates them over
//! the same trailing window.

use crate::align::{inner_join, AlignedPoint};
use crate::volatility::compute_realized_volatility;
use etfrisk_core::{PriceBar, Result, SeriesPoint, WindowSpec};
use tracing::debug;

/// Compute the rolling correlation between the realized-volatility series of
/// a target instrument and a benchmark.
///
/// Each side is re-validated and re-derived from its own price series;
/// validation failures from the inner volatility computations propagate
/// unchanged, so this entry point reports the volatility family's wording.
/// No additional window-fit check is applied to the volatility series
/// themselves: if they are shorter than the window the result is empty.
pub fn compute_rolling_correlation(
    target_bars: &[PriceBar],
    benchmark_bars: &[PriceBar],
    price_type: &str,
    rolling_window_days: u32,
    price_frequency_hours: f64,
) -> Result<Vec<SeriesPoint>> {
    let target_rv = compute_realized_volatility(
        target_bars,
        price_type,
        rolling_window_days,
        price_frequency_hours,
    )?;
    let benchmark_rv = compute_realized_volatility(
        benchmark_bars,
        price_type,
        rolling_window_days,
        price_frequency_hours,
    )?;

    let spec = WindowSpec::new(rolling_window_days, price_frequency_hours);
    let window = spec.len();
    debug!(
        window,
        target_len = target_rv.len(),
        benchmark_len = benchmark_rv.len(),
        "computing rolling realized correlation"
    );

    let joined = inner_join(&target_rv, &benchmark_rv);
    Ok(rolling_correlation(&joined, window))
}

/// Trailing sample Pearson correlation over aligned series.
///
/// Evaluated from running sums of x, y, x², y² and xy in O(n). Each value is
/// labeled at its window's last timestamp; warm-up positions emit nothing,
/// as do windows where either side has zero variance or a non-finite value.
/// Results are clamped to [-1, 1] to absorb floating-point noise.
pub fn rolling_correlation(joined: &[AlignedPoint], window: usize) -> Vec<SeriesPoint> {
    if window == 0 || joined.len() < window {
        return Vec::new();
    }

    let n = window as f64;
    let mut out = Vec::with_capacity(joined.len() - window + 1);
    let (mut sum_x, mut sum_y) = (0.0f64, 0.0f64);
    let (mut sum_xx, mut sum_yy, mut sum_xy) = (0.0f64, 0.0f64, 0.0f64);
    let mut non_finite = 0usize;

    for (i, point) in joined.iter().enumerate() {
        if point.target.is_finite() && point.benchmark.is_finite() {
            sum_x += point.target;
            sum_y += point.benchmark;
            sum_xx += point.target * point.target;
            sum_yy += point.benchmark * point.benchmark;
            sum_xy += point.target * point.benchmark;
        } else {
            non_finite += 1;
        }
        if i >= window {
            let old = &joined[i - window];
            if old.target.is_finite() && old.benchmark.is_finite() {
                sum_x -= old.target;
                sum_y -= old.benchmark;
                sum_xx -= old.target * old.target;
                sum_yy -= old.benchmark * old.benchmark;
                sum_xy -= old.target * old.benchmark;
            } else {
                non_finite -= 1;
            }
        }
        if i + 1 >= window && non_finite == 0 {
            let cov_n = n * sum_xy - sum_x * sum_y;
            let var_x_n = n * sum_xx - sum_x * sum_x;
            let var_y_n = n * sum_yy - sum_y * sum_y;
            let corr = cov_n / (var_x_n * var_y_n).sqrt();
            if corr.is_finite() {
                out.push(SeriesPoint::new(point.ts_ms, corr.clamp(-1.0, 1.0)));
            }
        }
    }
    out
}
