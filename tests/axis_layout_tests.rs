use approx::assert_relative_eq;
use tickgrid_rs::{AxisFitTuning, AxisLayout, TickError};

#[test]
fn layout_from_samples_applies_default_padding() {
    let samples: Vec<f64> = (0..7).map(|i| 32_640.0 + f64::from(i) * 10.0).collect();
    let layout =
        AxisLayout::from_samples(&samples, 7, AxisFitTuning::default()).expect("valid layout");

    let (start, stop) = layout.span();
    assert_relative_eq!(start, 32_634.0, max_relative = 1e-12);
    assert_relative_eq!(stop, 32_706.0, max_relative = 1e-12);

    assert_relative_eq!(layout.intervals().major, 10.0, max_relative = 1e-12);
    assert_eq!(layout.major_positions().len(), 7);
    assert_relative_eq!(layout.major_positions()[0], 32_640.0, max_relative = 1e-12);
}

#[test]
fn layout_from_explicit_bounds_matches_core_operations() {
    let layout = AxisLayout::fit(0.0, 1.0, 9).expect("valid layout");

    assert_eq!(layout.target_tick_count(), 9);
    assert_eq!(layout.major_positions().len(), 11);
    assert_eq!(
        layout.minor_positions().len(),
        layout.ticks().minor_positions.len()
    );
}

#[test]
fn empty_samples_are_rejected() {
    let result = AxisLayout::from_samples(&[], 7, AxisFitTuning::default());
    assert!(matches!(result, Err(TickError::InvalidData(_))));
}

#[test]
fn non_finite_samples_are_rejected() {
    let samples = [1.0, f64::NAN, 3.0];
    let result = AxisLayout::from_samples(&samples, 7, AxisFitTuning::default());
    assert!(matches!(result, Err(TickError::InvalidData(_))));
}

#[test]
fn constant_samples_widen_to_minimum_span() {
    let samples = [5.0, 5.0, 5.0];
    let layout =
        AxisLayout::from_samples(&samples, 7, AxisFitTuning::default()).expect("valid layout");

    let (start, stop) = layout.span();
    assert!(stop > start);
    assert!(!layout.major_positions().is_empty());
}

#[test]
fn negative_padding_ratio_is_rejected() {
    let tuning = AxisFitTuning {
        low_padding_ratio: -0.1,
        ..AxisFitTuning::default()
    };
    let result = AxisLayout::from_samples(&[1.0, 2.0], 7, tuning);
    assert!(matches!(result, Err(TickError::InvalidData(_))));
}

#[test]
fn zero_minimum_span_is_rejected() {
    let tuning = AxisFitTuning {
        min_span_absolute: 0.0,
        ..AxisFitTuning::default()
    };
    let result = AxisLayout::from_samples(&[1.0, 2.0], 7, tuning);
    assert!(matches!(result, Err(TickError::InvalidData(_))));
}

#[test]
fn tuning_round_trips_through_serde() {
    let tuning = AxisFitTuning {
        low_padding_ratio: 0.05,
        high_padding_ratio: 0.2,
        min_span_absolute: 0.001,
    };

    let json = serde_json::to_string(&tuning).expect("serialize tuning");
    let restored: AxisFitTuning = serde_json::from_str(&json).expect("deserialize tuning");

    assert_eq!(restored, tuning);
}

#[test]
fn label_precision_follows_the_major_interval() {
    let tenths = AxisLayout::fit(0.0, 1.0, 9).expect("valid layout");
    assert_eq!(tenths.label_precision(), 1);

    let tens = AxisLayout::fit(32_634.0, 32_706.0, 7).expect("valid layout");
    assert_eq!(tens.label_precision(), 0);
}

#[test]
fn into_ticks_releases_the_tick_set() {
    let layout = AxisLayout::fit(-10.0, 10.0, 7).expect("valid layout");
    let majors = layout.major_positions().len();

    let ticks = layout.into_ticks();
    assert_eq!(ticks.major_positions.len(), majors);
}
