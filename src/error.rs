use thiserror::Error;

pub type TickResult<T> = Result<T, TickError>;

#[derive(Debug, Error)]
pub enum TickError {
    #[error("invalid range: start={start}, stop={stop} (stop must exceed start)")]
    InvalidRange { start: f64, stop: f64 },

    #[error("invalid tick count: {requested} (at least 1 tick is required)")]
    InvalidTickCount { requested: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
