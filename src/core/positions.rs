use crate::core::types::{IntervalPair, TickSet};

/// Snap tolerance, applied in quotient space (`bound / interval`), making it
/// relative to the interval being snapped regardless of data magnitude.
pub const SNAP_EPSILON: f64 = 1e-3;

/// Edge handling for tick snapping.
///
/// Major ticks snap `Outward`: a bound sitting numerically on (or within the
/// epsilon band of) an interval multiple keeps its edge tick, so the major
/// grid may extend marginally past the requested span. Minor ticks snap
/// `Inward`: edge positions within the epsilon band are dropped so the minor
/// grid never coincides with or overshoots the span boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapMode {
    Outward,
    Inward,
}

/// Produces the ordered major and minor tick positions for `[start, stop]`
/// under the given interval pair.
///
/// Never fails: a span too small to hold a single interval multiple yields
/// an empty sequence for that tier, which renders as "no ticks".
#[must_use]
pub fn generate_positions(start: f64, stop: f64, pair: IntervalPair) -> TickSet {
    TickSet {
        major_positions: spaced_positions(start, stop, pair.major, SnapMode::Outward),
        minor_positions: spaced_positions(start, stop, pair.minor, SnapMode::Inward),
    }
}

fn spaced_positions(start: f64, stop: f64, interval: f64, mode: SnapMode) -> Vec<f64> {
    if !interval.is_finite() || interval <= 0.0 {
        return Vec::new();
    }

    let (start_bias, stop_bias) = match mode {
        SnapMode::Outward => (-SNAP_EPSILON, SNAP_EPSILON),
        SnapMode::Inward => (SNAP_EPSILON, -SNAP_EPSILON),
    };

    let snapped_start = (start / interval + start_bias).ceil() * interval;
    let snapped_end = (stop / interval + stop_bias).floor() * interval;

    // Rounding the interval count before emission keeps the position count
    // stable against floating-point drift in the snapped bounds.
    let intervals = ((snapped_end - snapped_start) / interval).round();
    if !intervals.is_finite() || intervals < 0.0 {
        return Vec::new();
    }

    let count = intervals as usize + 1;
    if count == 1 {
        return vec![snapped_start];
    }

    let step = (snapped_end - snapped_start) / (count - 1) as f64;
    (0..count)
        .map(|index| snapped_start + step * index as f64)
        .collect()
}
