//! Rolling OLS beta against a benchmark.
//!
//! Regresses target log returns on benchmark log returns (plus intercept)
//! over a sliding window and keeps the slope.

use crate::align::{inner_join, AlignedPoint};
use crate::returns::log_returns;
use etfrisk_core::{MetricFamily, PriceBar, PriceField, Result, SeriesPoint, WindowSpec};
use tracing::debug;

/// Compute a rolling-beta series of a target instrument against a benchmark.
///
/// Both price histories are validated up front (the window must fit the
/// shorter raw series), returns are derived per series, and the two return
/// series are inner-joined on timestamp before the sliding regression.
pub fn compute_rolling_beta(
    target_bars: &[PriceBar],
    benchmark_bars: &[PriceBar],
    price_type: &str,
    rolling_window_days: u32,
    price_frequency_hours: f64,
) -> Result<Vec<SeriesPoint>> {
    let family = MetricFamily::RollingBeta;
    let field = PriceField::parse(price_type, family)?;
    let spec = WindowSpec::new(rolling_window_days, price_frequency_hours);
    let available = target_bars.len().min(benchmark_bars.len());
    let window = spec.validate_fits(available, family)?;

    debug!(
        window,
        scalar = spec.scalar(),
        target_rows = target_bars.len(),
        benchmark_rows = benchmark_bars.len(),
        "computing rolling beta"
    );

    let target = log_returns(target_bars, field);
    let benchmark = log_returns(benchmark_bars, field);
    let joined = inner_join(&target, &benchmark);
    Ok(rolling_beta(&joined, window))
}

/// Sliding-window OLS slope of target on benchmark returns.
///
/// For the two-column design `[benchmark, 1]` the least-squares slope equals
/// `cov(target, benchmark) / var(benchmark)`, so the window is evaluated from
/// running sums of x, y, x² and xy in O(n) overall. Each beta is labeled at
/// its window's last timestamp. Windows with a constant benchmark have zero
/// variance and produce no entry; windows containing a non-finite return are
/// likewise skipped.
pub fn rolling_beta(joined: &[AlignedPoint], window: usize) -> Vec<SeriesPoint> {
    if window == 0 || joined.len() < window {
        return Vec::new();
    }

    let n = window as f64;
    let mut out = Vec::with_capacity(joined.len() - window + 1);
    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    let mut non_finite = 0usize;

    for (i, point) in joined.iter().enumerate() {
        if point.target.is_finite() && point.benchmark.is_finite() {
            sum_x += point.benchmark;
            sum_y += point.target;
            sum_xx += point.benchmark * point.benchmark;
            sum_xy += point.benchmark * point.target;
        } else {
            non_finite += 1;
        }
        if i >= window {
            let old = &joined[i - window];
            if old.target.is_finite() && old.benchmark.is_finite() {
                sum_x -= old.benchmark;
                sum_y -= old.target;
                sum_xx -= old.benchmark * old.benchmark;
                sum_xy -= old.benchmark * old.target;
            } else {
                non_finite -= 1;
            }
        }
        if i + 1 >= window && non_finite == 0 {
            let beta = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
            if beta.is_finite() {
                out.push(SeriesPoint::new(point.ts_ms, beta));
            }
        }
    }
    out
}
