use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart size: width={width}, height={height}")]
    InvalidChartSize { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("observation limit reached: at most {limit} observations")]
    ObservationLimit { limit: usize },

    #[error("invalid generator input: {0}")]
    InvalidGeneratorInput(String),

    #[error("storage i/o failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
