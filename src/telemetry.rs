//! Telemetry helpers for applications embedding `tickgrid-rs`.
//!
//! Tracing setup stays explicit and opt-in. Consumers can either call
//! `init_default_tracing` or wire their own `tracing` subscriber and
//! filters; the tick computations themselves never emit events.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Honors `RUST_LOG` when set and otherwise limits output to this crate's
/// own events at `info`.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        const DEFAULT_FILTER: &str = "tickgrid_rs=info";

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
