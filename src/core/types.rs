use serde::{Deserialize, Serialize};

use crate::error::{TickError, TickResult};

/// A validated numeric data span.
///
/// `stop` strictly exceeds `start`; zero or inverted spans are rejected at
/// construction so the decade computation downstream never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    start: f64,
    stop: f64,
}

impl Span {
    pub fn new(start: f64, stop: f64) -> TickResult<Self> {
        if !start.is_finite() || !stop.is_finite() || stop <= start {
            return Err(TickError::InvalidRange { start, stop });
        }

        Ok(Self { start, stop })
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn stop(self) -> f64 {
        self.stop
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.stop - self.start
    }

    /// Largest power of ten not exceeding the span width.
    #[must_use]
    pub fn decade(self) -> f64 {
        10.0_f64.powf(self.width().log10().floor())
    }

    /// Span width rescaled into `[1, 10)` by its decade.
    #[must_use]
    pub fn normalized_width(self) -> f64 {
        self.width() / self.decade()
    }
}

/// A major tick interval and its compatible minor subdivision interval.
///
/// `minor` always divides `major` evenly by 4 or 5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalPair {
    pub major: f64,
    pub minor: f64,
}

/// Ordered major and minor tick positions over a span.
///
/// Both sequences are strictly increasing. Either may be empty when the span
/// is too small to hold a single interval multiple.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickSet {
    pub major_positions: Vec<f64>,
    pub minor_positions: Vec<f64>,
}
