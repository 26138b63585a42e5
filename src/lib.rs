//! tickgrid-rs: axis tick layout for plotting frontends.
//!
//! This crate solves the "nice axis labeling" problem: given a numeric span
//! and a desired tick density, pick a round major interval with a compatible
//! minor subdivision and emit the ordered tick positions. The core is pure
//! and stateless; rendering, data acquisition, and document export are the
//! caller's concern.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisFitTuning, AxisLayout};
pub use crate::core::{IntervalPair, Span, TickSet, generate_positions, select_interval};
pub use error::{TickError, TickResult};
