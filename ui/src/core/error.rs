//! Error type shared by the chart and gauge core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The canonical series holds no samples; nothing can be sliced or scaled.
    #[error("series contains no samples")]
    EmptySeries,

    #[error("sample {index} has non-finite value {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    /// A pointer or layout coordinate that is NaN or infinite.
    #[error("{name} must be a finite coordinate, got {value}")]
    InvalidCoordinate { name: &'static str, value: f64 },

    #[error("invalid dashboard config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("invalid dashboard setting: {0}")]
    InvalidSetting(String),
}

pub type ChartResult<T> = Result<T, ChartError>;

pub(crate) fn finite(name: &'static str, value: f64) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidCoordinate { name, value })
    }
}
