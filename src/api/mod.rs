use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{IntervalPair, TickSet, generate_positions, select_interval};
use crate::error::{TickError, TickResult};

/// Tuning controls for fitting an axis span from raw channel samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFitTuning {
    pub low_padding_ratio: f64,
    pub high_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for AxisFitTuning {
    fn default() -> Self {
        Self {
            low_padding_ratio: 0.10,
            high_padding_ratio: 0.10,
            min_span_absolute: 0.000_001,
        }
    }
}

impl AxisFitTuning {
    fn validate(self) -> TickResult<Self> {
        if !self.low_padding_ratio.is_finite()
            || !self.high_padding_ratio.is_finite()
            || self.low_padding_ratio < 0.0
            || self.high_padding_ratio < 0.0
        {
            return Err(TickError::InvalidData(
                "axis fit padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(TickError::InvalidData(
                "axis fit min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Tick layout for a single axis: the fitted span, the selected interval
/// pair, and the generated tick positions.
///
/// This is the convenience layer a renderer talks to; the underlying
/// `core` operations stay pure and can be called directly.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    span_start: f64,
    span_stop: f64,
    target_tick_count: u32,
    intervals: IntervalPair,
    ticks: TickSet,
}

impl AxisLayout {
    /// Builds a layout from explicit span bounds.
    pub fn fit(start: f64, stop: f64, target_tick_count: u32) -> TickResult<Self> {
        let intervals = select_interval(start, stop, target_tick_count)?;
        let ticks = generate_positions(start, stop, intervals);
        trace!(
            start,
            stop,
            target_tick_count,
            major = intervals.major,
            minor = intervals.minor,
            "fit axis layout"
        );
        Ok(Self {
            span_start: start,
            span_stop: stop,
            target_tick_count,
            intervals,
            ticks,
        })
    }

    /// Fits a padded span from raw channel samples, then builds the layout.
    ///
    /// The padding ratios apply to the raw `min..max` width on each side, so
    /// the default tuning reproduces a 10% margin around the data. A channel
    /// whose samples are all equal is widened to `min_span_absolute`.
    pub fn from_samples(
        samples: &[f64],
        target_tick_count: u32,
        tuning: AxisFitTuning,
    ) -> TickResult<Self> {
        let tuning = tuning.validate()?;

        if samples.is_empty() {
            return Err(TickError::InvalidData(
                "axis layout cannot be fitted from empty samples".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for sample in samples {
            if !sample.is_finite() {
                return Err(TickError::InvalidData(
                    "axis samples must be finite".to_owned(),
                ));
            }
            min = min.min(*sample);
            max = max.max(*sample);
        }

        if min == max {
            let half = tuning.min_span_absolute / 2.0;
            min -= half;
            max += half;
        }

        let width = max - min;
        let start = min - width * tuning.low_padding_ratio;
        let stop = max + width * tuning.high_padding_ratio;
        debug!(
            sample_count = samples.len(),
            fitted_start = start,
            fitted_stop = stop,
            "fit axis span from samples"
        );

        Self::fit(start, stop, target_tick_count)
    }

    #[must_use]
    pub fn span(&self) -> (f64, f64) {
        (self.span_start, self.span_stop)
    }

    #[must_use]
    pub fn target_tick_count(&self) -> u32 {
        self.target_tick_count
    }

    #[must_use]
    pub fn intervals(&self) -> IntervalPair {
        self.intervals
    }

    #[must_use]
    pub fn ticks(&self) -> &TickSet {
        &self.ticks
    }

    #[must_use]
    pub fn major_positions(&self) -> &[f64] {
        &self.ticks.major_positions
    }

    #[must_use]
    pub fn minor_positions(&self) -> &[f64] {
        &self.ticks.minor_positions
    }

    #[must_use]
    pub fn into_ticks(self) -> TickSet {
        self.ticks
    }

    /// Decimal places a renderer needs to print major-tick labels without
    /// collapsing adjacent values.
    #[must_use]
    pub fn label_precision(&self) -> usize {
        precision_from_interval(self.intervals.major)
    }
}

fn precision_from_interval(interval: f64) -> usize {
    if !interval.is_finite() || interval <= 0.0 {
        return 2;
    }
    let text = format!("{:.12}", interval.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().min(12)
}
