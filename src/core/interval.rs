use crate::core::types::{IntervalPair, Span};
use crate::error::{TickError, TickResult};

/// Trial intervals over a single decade, paired with minor subdivision
/// counts. Ordered finest-first; the 2-series rows subdivide by 4, all
/// others by 5.
const CANDIDATES: [(f64, f64); 12] = [
    (0.010, 5.0),
    (0.020, 4.0),
    (0.025, 5.0),
    (0.050, 5.0),
    (0.100, 5.0),
    (0.200, 4.0),
    (0.250, 5.0),
    (0.500, 5.0),
    (1.000, 5.0),
    (2.000, 4.0),
    (2.500, 5.0),
    (5.000, 5.0),
];

/// Chooses the finest "nice" major interval whose estimated tick count over
/// `[start, stop]` does not exceed `target_tick_count`, plus the compatible
/// minor interval.
///
/// The span is normalized into `[1, 10)` by its decade before the table
/// walk, so spans of any absolute magnitude resolve through the same twelve
/// candidates. When several rows tie on tick count the finest one wins.
/// If no row satisfies the bound the walk clamps to the coarsest row.
pub fn select_interval(start: f64, stop: f64, target_tick_count: u32) -> TickResult<IntervalPair> {
    if target_tick_count == 0 {
        return Err(TickError::InvalidTickCount {
            requested: target_tick_count,
        });
    }

    let span = Span::new(start, stop)?;
    let decade = span.decade();
    let normalized = span.normalized_width();

    let mut chosen = CANDIDATES[CANDIDATES.len() - 1];
    for candidate in CANDIDATES {
        if fitted_interval_count(normalized, candidate.0) <= f64::from(target_tick_count) {
            chosen = candidate;
            break;
        }
    }

    let (trial_interval, subdivision_count) = chosen;
    let major = decade * trial_interval;
    Ok(IntervalPair {
        major,
        minor: major / subdivision_count,
    })
}

/// Number of whole `interval` multiples that fit inside `span`.
///
/// The rounded IEEE quotient can claim one multiple too many: `1.0 / 0.1`
/// rounds to exactly `10.0` even though ten multiples of the stored `0.1`
/// overshoot `1.0`. The `mul_add` check drops that phantom multiple while
/// leaving exact fits (`8 * 0.25 == 2.0`) untouched.
fn fitted_interval_count(span: f64, interval: f64) -> f64 {
    let count = (span / interval).floor();
    if count.mul_add(interval, -span) > 0.0 {
        count - 1.0
    } else {
        count
    }
}
