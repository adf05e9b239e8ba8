//! Timestamp alignment of two derived series.

use etfrisk_core::{SeriesPoint, TimestampMs};
use serde::{Deserialize, Serialize};

/// One aligned target/benchmark observation pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Shared timestamp in milliseconds.
    pub ts_ms: TimestampMs,
    /// Target series value.
    pub target: f64,
    /// Benchmark series value.
    pub benchmark: f64,
}

/// Inner join of two timestamp-ordered series on equal timestamps.
///
/// Rows present in only one series are excluded, and rows where either value
/// is NaN are dropped after the join. Output order is ascending by timestamp
/// with no duplicates, assuming both inputs are strictly ordered.
pub fn inner_join(target: &[SeriesPoint], benchmark: &[SeriesPoint]) -> Vec<AlignedPoint> {
    let mut out = Vec::with_capacity(target.len().min(benchmark.len()));
    let (mut i, mut j) = (0, 0);
    while i < target.len() && j < benchmark.len() {
        let (t, b) = (&target[i], &benchmark[j]);
        if t.ts_ms < b.ts_ms {
            i += 1;
        } else if t.ts_ms > b.ts_ms {
            j += 1;
        } else {
            if !t.value.is_nan() && !b.value.is_nan() {
                out.push(AlignedPoint {
                    ts_ms: t.ts_ms,
                    target: t.value,
                    benchmark: b.value,
                });
            }
            i += 1;
            j += 1;
        }
    }
    out
}
