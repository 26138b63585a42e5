use tickgrid_rs::telemetry::init_default_tracing;

#[test]
fn tracing_init_is_safe_to_call_repeatedly() {
    let first = init_default_tracing();
    let second = init_default_tracing();

    if cfg!(feature = "telemetry") {
        // At most one call can install the global subscriber.
        assert!(!(first && second));
    } else {
        assert!(!first && !second);
    }
}
