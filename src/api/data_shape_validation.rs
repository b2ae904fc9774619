use crate::core::PlotMode;
use crate::error::{ChartError, ChartResult};

/// Largest row count drawn as histogram or bar chart at overlay size.
pub const MAX_BAR_ROWS: usize = 100;

/// Checks that `rows` is a drawable row count for `mode`.
pub fn validate_row_count(mode: PlotMode, rows: usize) -> ChartResult<()> {
    if rows < mode.min_rows() {
        return Err(ChartError::InsufficientData { mode, rows });
    }
    if mode.is_bar_like() && rows > MAX_BAR_ROWS {
        return Err(ChartError::TooManyPoints { mode, rows });
    }
    Ok(())
}
