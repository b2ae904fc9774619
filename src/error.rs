use thiserror::Error;

use crate::core::PlotMode;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no data tables found in selected pipeline")]
    NoTablesAvailable,

    #[error(
        "data table \"{requested}\" not found; available data tables: {}",
        .available.join(", ")
    )]
    TableNotFound {
        requested: String,
        available: Vec<String>,
    },

    #[error("data table has no y-axis descriptor")]
    NoYAxis,

    #[error("auto-detection of plot mode not possible; choose a plot mode explicitly")]
    ModeUndetermined,

    #[error("not enough data points for {mode} plot: rows={rows}")]
    InsufficientData { mode: PlotMode, rows: usize },

    #[error("too many data points for {mode} plot: rows={rows}")]
    TooManyPoints { mode: PlotMode, rows: usize },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
