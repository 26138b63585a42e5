pub mod interval;
pub mod positions;
pub mod types;

pub use interval::select_interval;
pub use positions::generate_positions;
pub use types::{IntervalPair, Span, TickSet};
